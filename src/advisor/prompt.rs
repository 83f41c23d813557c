//! Prompt assembly for the styling request.

use super::types::{StylingContext, UserProfile};

/// Role framing sent at the top of every styling prompt.
pub const STYLIST_ROLE: &str = "You are an expert fashion stylist.";

/// Builds the natural-language instruction sent alongside the photo. Pure
/// string formatting: identical inputs always yield byte-identical output.
pub fn build_prompt(profile: &UserProfile, context: &StylingContext) -> String {
    format!(
        "{role}\n\n\
         **USER PROFILE:**\n\
         - Gender: {gender}\n\
         - Skin Tone: {skin_tone} (consider color theory)\n\
         - Body Type: {body_type} (consider silhouette)\n\n\
         **THE SCENARIO:**\n\
         - Occasion: {occasion}\n\
         - Weather: {weather}\n\n\
         **YOUR TASK:**\n\
         The attached photo shows a single clothing item. Identify its \
         category, color and style, then:\n\
         1. Recommend 2 specific items to pair with it.\n\
         2. Explain WHY this works (color theory & silhouette).\n\
         3. Give one specific styling tip (e.g. \"Tuck it in\", \"Roll sleeves\").\n\n\
         Keep the tone encouraging, stylish, and concise.",
        role = STYLIST_ROLE,
        gender = profile.gender,
        skin_tone = profile.skin_tone,
        body_type = profile.body_type,
        occasion = context.occasion,
        weather = context.weather,
    )
}
