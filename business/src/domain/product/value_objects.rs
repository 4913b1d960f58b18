/// Public URL prefix under which stored images are served.
pub const IMAGE_PATH_PREFIX: &str = "/images/";

/// Largest accepted upload, in bytes.
pub const MAX_IMAGE_SIZE: usize = 10_000_000;

const ALLOWED_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Composes the stored image path from a generated file name.
pub fn image_path(file_name: &str) -> String {
    format!("{}{}", IMAGE_PATH_PREFIX, file_name.trim_start_matches('/'))
}

/// Raw uploaded image as received by the transport.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl ImageUpload {
    /// Checks format and size, returning the file extension to store under.
    ///
    /// The content type wins over the file name; the name is only consulted
    /// when the client sent no content type.
    pub fn accepted_extension(&self) -> Option<&'static str> {
        if self.data.is_empty() || self.data.len() > MAX_IMAGE_SIZE {
            return None;
        }

        let candidate = match (&self.content_type, &self.file_name) {
            (Some(content_type), _) => content_type.to_ascii_lowercase(),
            (None, Some(file_name)) => file_name.to_ascii_lowercase(),
            (None, None) => return None,
        };

        let extension = ALLOWED_IMAGE_EXTENSIONS
            .into_iter()
            .find(|ext| candidate.ends_with(ext))?;

        Some(if extension == "jpeg" { "jpg" } else { extension })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn upload(content_type: Option<&str>, file_name: Option<&str>, size: usize) -> ImageUpload {
        ImageUpload {
            file_name: file_name.map(str::to_string),
            content_type: content_type.map(str::to_string),
            data: vec![0u8; size],
        }
    }

    #[test]
    fn should_compose_image_path_with_prefix() {
        assert_eq!(image_path("h1.png"), "/images/h1.png");
        assert_eq!(image_path("/h1.png"), "/images/h1.png");
    }

    #[test]
    fn should_accept_png_and_jpeg_content_types() {
        assert_eq!(upload(Some("image/png"), None, 10).accepted_extension(), Some("png"));
        assert_eq!(upload(Some("image/jpeg"), None, 10).accepted_extension(), Some("jpg"));
        assert_eq!(upload(Some("image/jpg"), None, 10).accepted_extension(), Some("jpg"));
    }

    #[test]
    fn should_reject_other_content_types() {
        assert_eq!(upload(Some("image/gif"), Some("a.png"), 10).accepted_extension(), None);
        assert_eq!(upload(Some("application/pdf"), None, 10).accepted_extension(), None);
    }

    #[test]
    fn should_fall_back_to_file_name_when_content_type_missing() {
        assert_eq!(upload(None, Some("hammer.PNG"), 10).accepted_extension(), Some("png"));
        assert_eq!(upload(None, Some("hammer.txt"), 10).accepted_extension(), None);
        assert_eq!(upload(None, None, 10).accepted_extension(), None);
    }

    #[test]
    fn should_reject_empty_upload() {
        assert_eq!(upload(Some("image/png"), None, 0).accepted_extension(), None);
    }

    proptest! {
        #[test]
        fn accepts_any_png_file_name_without_content_type(stem in "[a-zA-Z0-9_-]{1,32}") {
            let image = upload(None, Some(&format!("{stem}.png")), 16);
            prop_assert_eq!(image.accepted_extension(), Some("png"));
        }

        #[test]
        fn image_path_always_starts_with_prefix(name in "/{0,3}[a-z0-9]{1,16}\\.(png|jpg)") {
            let path = image_path(&name);
            prop_assert!(path.starts_with(IMAGE_PATH_PREFIX));
            prop_assert!(!path[IMAGE_PATH_PREFIX.len()..].starts_with('/'));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn rejects_sizes_over_the_limit(extra in 1usize..1024) {
            let image = upload(Some("image/png"), None, MAX_IMAGE_SIZE + extra);
            prop_assert_eq!(image.accepted_extension(), None);
        }
    }

    #[test]
    fn should_accept_upload_at_exact_size_limit() {
        assert_eq!(upload(Some("image/png"), None, MAX_IMAGE_SIZE).accepted_extension(), Some("png"));
    }
}
