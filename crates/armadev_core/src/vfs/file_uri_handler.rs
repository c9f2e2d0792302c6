use lsp_types::Uri;
use percent_encoding::percent_decode_str;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

pub fn file_path_to_uri(path: &PathBuf) -> Option<Uri> {
    Url::from_file_path(path)
        .ok()
        .and_then(|url| Uri::from_str(url.as_str()).ok())
}

pub fn uri_to_file_path(uri: &Uri) -> Option<PathBuf> {
    let url = Url::parse(uri.as_str()).ok()?;
    if url.scheme() != "file" {
        return None;
    }

    let decoded_path = percent_decode_str(url.path())
        .decode_utf8()
        .ok()?
        .to_string();

    let decoded_path = if cfg!(windows) {
        // file URIs carry `/C:/...`; strip the leading slash and normalize
        // the drive letter so prefix comparisons behave.
        let mut windows_path = decoded_path.trim_start_matches('/').replace('\\', "/");
        if windows_path.len() >= 2 && windows_path.chars().nth(1) == Some(':') {
            let drive = windows_path.chars().next()?.to_ascii_uppercase();
            windows_path.replace_range(..2, &format!("{}:", drive));
        }

        windows_path
    } else {
        decoded_path
    };

    Some(PathBuf::from(decoded_path))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_round_trip() {
        if cfg!(windows) {
            let path = PathBuf::from("C:/Users/dev/project/addons/medical/stringtable.xml");
            let uri = file_path_to_uri(&path).unwrap();
            assert_eq!(uri_to_file_path(&uri).unwrap(), path);
        } else {
            let path = PathBuf::from("/home/dev/project/addons/medical/stringtable.xml");
            let uri = file_path_to_uri(&path).unwrap();
            assert_eq!(uri_to_file_path(&uri).unwrap(), path);
        }
    }

    #[test]
    fn test_percent_decoding() {
        if !cfg!(windows) {
            let uri = Uri::from_str("file:///home/dev/my%20project/addons/medical").unwrap();
            let path = uri_to_file_path(&uri).unwrap();
            assert_eq!(path, Path::new("/home/dev/my project/addons/medical"));
        }
    }

    #[test]
    fn test_non_file_scheme() {
        let uri = Uri::from_str("untitled:Untitled-1").unwrap();
        assert_eq!(uri_to_file_path(&uri), None);
    }
}
