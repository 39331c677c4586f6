//! Forward-slash path helpers.
//!
//! Playlists written on one machine may carry Windows notation
//! (`C:\RetroArch\cores\x.dll`) while being imported on another, so every
//! path the rewriter touches is handled as a `/`-separated string rather
//! than through the host's [`std::path::Path`] rules.

use std::borrow::Cow;

/// Normalize a raw path string to forward-slash form.
///
/// Strings containing a backslash are read as Windows paths. Anything else
/// gets a leading `~` expanded to the home directory. Repeated separators,
/// `.` components and trailing separators are removed in both cases.
pub fn normalize(raw: &str) -> String {
    if raw.contains('\\') {
        let cleaned = clean(&raw.replace('\\', "/"));
        // UNC paths keep their double leading slash.
        if raw.starts_with(r"\\") {
            format!("/{}", cleaned)
        } else {
            cleaned
        }
    } else {
        clean(&expand_home(raw))
    }
}

fn expand_home(raw: &str) -> Cow<'_, str> {
    let rest = if raw == "~" {
        ""
    } else if let Some(rest) = raw.strip_prefix("~/") {
        rest
    } else {
        return Cow::Borrowed(raw);
    };

    match dirs::home_dir() {
        Some(home) => {
            let home = home.to_string_lossy().replace('\\', "/");
            let home = home.trim_end_matches('/');
            Cow::Owned(format!("{}/{}", home, rest))
        }
        None => Cow::Borrowed(raw),
    }
}

fn clean(path: &str) -> String {
    let body = path
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect::<Vec<_>>()
        .join("/");
    if path.starts_with('/') {
        format!("/{}", body)
    } else {
        body
    }
}

/// Whether a normalized path is rooted, either POSIX style or at a drive letter.
pub fn is_absolute(path: &str) -> bool {
    if path.starts_with('/') {
        return true;
    }
    let bytes = path.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes.len() == 2 || bytes[2] == b'/')
}

/// Join two normalized paths. An absolute `rest` replaces `base`.
pub fn join(base: &str, rest: &str) -> String {
    if rest.is_empty() {
        base.to_string()
    } else if base.is_empty() || is_absolute(rest) {
        rest.to_string()
    } else if base.ends_with('/') {
        format!("{}{}", base, rest)
    } else {
        format!("{}/{}", base, rest)
    }
}

/// Final component of a normalized path (empty for `/` or `""`).
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').find(|part| !part.is_empty()).unwrap_or("")
}

/// File name without its extension.
///
/// A dot at the very start or very end of the name does not start an
/// extension, so `.bashrc` and `core.` are returned whole.
pub fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) if i > 0 && i < name.len() - 1 => &name[..i],
        _ => name,
    }
}

/// Swap the extension of `name` for `extension` (which includes its dot),
/// appending it when `name` has none.
pub fn replace_extension(name: &str, extension: &str) -> String {
    format!("{}{}", file_stem(name), extension)
}
