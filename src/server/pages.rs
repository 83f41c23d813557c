//! HTML for the single-view form and its result/error panels.

use crate::advisor::{BODY_SHAPES, GENDER_OPTIONS, OCCASIONS, SKIN_TONES, WEATHER_CONDITIONS};
use std::fmt::Write as _;

const PAGE_STYLE: &str = "body{font-family:sans-serif;max-width:640px;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:.75rem}input,select{width:100%;padding:.4rem}\
button{margin-top:1rem;padding:.6rem 1.2rem}\
.advice{white-space:pre-wrap;background:#f6f6f6;padding:1rem;border-radius:6px}\
.error{color:#b00020;background:#fde8e8;padding:1rem;border-radius:6px}";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn options(values: &[&str]) -> String {
    let mut out = String::new();
    for value in values {
        let escaped = escape(value);
        let _ = write!(out, "<option value=\"{escaped}\">{escaped}</option>");
    }
    out
}

fn page(body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
         <title>Outfit Stylist</title><style>{PAGE_STYLE}</style></head>\
         <body><h1>Outfit Stylist</h1>{body}</body></html>"
    )
}

pub fn form_page() -> String {
    page(&format!(
        "<p>Upload a clothing photo and get styling advice for your occasion.</p>\
         <form action=\"/advice\" method=\"post\" enctype=\"multipart/form-data\">\
         <label>Gemini API Key<input type=\"password\" name=\"api_key\" required></label>\
         <label>Gender<select name=\"gender\">{genders}</select></label>\
         <label>Skin Tone<select name=\"skin_tone\">{skin_tones}</select></label>\
         <label>Body Shape<select name=\"body_type\">{body_shapes}</select></label>\
         <label>Occasion<select name=\"occasion\">{occasions}</select></label>\
         <label>Weather<select name=\"weather\">{weather}</select></label>\
         <label>Clothing Photo<input type=\"file\" name=\"image\" accept=\"image/*\" required></label>\
         <button type=\"submit\">Get Styling Advice</button>\
         </form>",
        genders = options(GENDER_OPTIONS),
        skin_tones = options(SKIN_TONES),
        body_shapes = options(BODY_SHAPES),
        occasions = options(OCCASIONS),
        weather = options(WEATHER_CONDITIONS),
    ))
}

pub fn result_page(advice: &str) -> String {
    page(&format!(
        "<h2>Your Styled Look</h2><div class=\"advice\">{}</div>\
         <p><a href=\"/\">Style another item</a></p>",
        escape(advice)
    ))
}

pub fn error_page(message: &str, hint: &str) -> String {
    page(&format!(
        "<div class=\"error\"><strong>{}</strong><br>{}</div>\
         <p><a href=\"/\">Back to the form</a></p>",
        escape(message),
        escape(hint)
    ))
}
