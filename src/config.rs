/// Hosted form-collection endpoint. Submissions are forwarded there directly;
/// there is no backend of our own.
pub fn form_endpoint() -> &'static str {
    "https://formspree.io/f/xpqjkazv"
}
