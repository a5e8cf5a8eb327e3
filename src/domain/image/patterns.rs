use lazy_static::lazy_static;
use regex::Regex;

/// Prefix carried by an image payload that has already been inlined.
pub const ENCODING_PREFIX: &str = "data:image/png;base64,";

lazy_static! {
    // Scheme, then a dotted domain, `localhost`, or a dotted-quad address,
    // then an optional port and an optional path or query. Derived from
    // Django's URLValidator pattern.
    pub static ref VALID_URL: Regex = Regex::new(
        r"(?i)^(?:http|ftp)s?://(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?::\d+)?(?:/?|[/?]\S+)$"
    )
    .expect("URL pattern failed to compile");

    // Suffix check only. The single leading character keeps a bare extension
    // like "png" from passing on its own.
    pub static ref VALID_IMAGE: Regex = Regex::new(r"(?i).(gif|jpe?g|tiff?|png|webp|bmp)$")
        .expect("Image extension pattern failed to compile");
}
