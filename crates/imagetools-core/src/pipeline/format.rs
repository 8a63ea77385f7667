//! Source format classification and the capability probe.

/// Image format as declared by a MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    /// Never resized: the file may be animated.
    Gif,
    /// Some other `image/*` type the pipeline cannot re-encode.
    OtherImage,
    /// Not an image at all.
    NotImage,
}

/// Format the pipeline can re-encode into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Classify a MIME type such as `image/jpeg` or `image/png; charset=binary`.
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or_default().trim();

        let Some(subtype) = essence
            .get(..6)
            .filter(|prefix| prefix.eq_ignore_ascii_case("image/"))
            .map(|_| &essence[6..])
        else {
            return ImageFormat::NotImage;
        };

        match subtype.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" | "pjpeg" => ImageFormat::Jpeg,
            "png" => ImageFormat::Png,
            "gif" => ImageFormat::Gif,
            _ => ImageFormat::OtherImage,
        }
    }

    /// Output format used when re-encoding, if the pipeline supports it.
    pub fn output(self) -> Option<OutputFormat> {
        match self {
            ImageFormat::Jpeg => Some(OutputFormat::Jpeg),
            ImageFormat::Png => Some(OutputFormat::Png),
            ImageFormat::Gif | ImageFormat::OtherImage | ImageFormat::NotImage => None,
        }
    }
}

impl OutputFormat {
    /// Canonical MIME type.
    pub fn mime(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }
}

/// Capability probe: whether `mime` can be decoded, resized and re-encoded.
///
/// Hosts check this before invoking the pipeline and hand the original file
/// back unchanged when it returns false.
pub fn is_supported(mime: &str) -> bool {
    ImageFormat::from_mime(mime).output().is_some()
}
