use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};

// Service segments are base64url; decoding accepts them with or without padding.
pub(crate) const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

// Multibase code of base58btc, the only transform allowed for encoded keys.
pub(crate) const MULTIBASE_BASE58BTC: char = 'z';
