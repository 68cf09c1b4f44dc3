/// Build the SSML document sent to the synthesis endpoint.
///
/// `text` is inserted as-is; markup inside it reaches the provider unchanged.
pub fn build_ssml(locale: &str, voice_name: &str, text: &str) -> String {
    format!(
        "<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='{}'>\
         <voice name='{}'>{}</voice>\
         </speak>",
        locale, voice_name, text
    )
}
