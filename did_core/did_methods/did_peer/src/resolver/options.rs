use did_doc::schema::verification_method::VerificationMaterialFormat;

/// Knobs of [`super::PeerDidResolver`]. Keys come out as multibase unless told otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeerDidResolutionOptions {
    pub encoding: Option<VerificationMaterialFormat>,
}

impl PeerDidResolutionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set_encoding(mut self, encoding: VerificationMaterialFormat) -> Self {
        self.encoding = Some(encoding);
        self
    }

    pub fn encoding(&self) -> VerificationMaterialFormat {
        self.encoding.unwrap_or_default()
    }
}
