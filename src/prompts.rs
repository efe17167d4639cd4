//! Fixed prompt presets for the studio surfaces.
//!
//! These are part of the product behavior, not configuration: the chat
//! persona, the writer instruction, and the strict generator prompts for
//! single-file HTML output. The generator prompts forbid images entirely to
//! prevent broken links in the rendered preview.

/// Default chat persona.
pub const CHAT_PERSONA: &str = "You are Nexus, a helpful and intelligent AI assistant.";

/// System instruction for the website generator.
pub const WEBSITE_GENERATOR: &str = "You are an expert Frontend Developer. Generate a complete, single-file HTML structure with embedded CSS (Tailwind via CDN) and basic JS for the requested website. \nIMPORTANT: \n1. Do NOT use <img> tags or external image URLs. Use CSS background colors, patterns, or SVG icons instead.\n2. Output ONLY the raw HTML code. Start immediately with <!DOCTYPE html>.\n3. Do NOT use markdown code blocks.";

/// System instruction for the mobile app prototype generator.
pub const APP_PROTOTYPE: &str = "You are an expert Mobile App Prototyper. Generate a complete, single-file HTML/CSS/JS mobile app prototype using Tailwind CSS. \nIMPORTANT:\n1. Design must look like a native mobile app.\n2. Do NOT use <img> tags or external image URLs. Use CSS background colors, SVG icons, or text avatars instead.\n3. Output ONLY the raw HTML code. Start immediately with <!DOCTYPE html>.\n4. Do NOT use markdown code blocks.";

/// Image style presets offered by the image surface.
pub const IMAGE_STYLES: &[&str] = &[
    "No Style",
    "Photorealistic",
    "Cinematic",
    "Cartoon",
    "Anime / Manga",
    "Cyberpunk",
    "3D Render",
    "Oil Painting",
    "Watercolor",
    "Pixel Art",
    "Logo Design",
    "Abstract",
];

/// The style preset that leaves the prompt untouched.
pub const NO_STYLE: &str = "No Style";

/// Writer system instruction for a content type ("Blog Post", "Email", ...)
/// and tone ("Professional", "Casual", ...).
pub fn writer_instruction(content_type: &str, tone: &str) -> String {
    format!("You are a professional content writer. Write a {content_type} with a {tone} tone.")
}

/// Prefix an image prompt with a style preset, unless it is [`NO_STYLE`].
pub fn styled_image_prompt(style: &str, prompt: &str) -> String {
    if style == NO_STYLE {
        prompt.to_string()
    } else {
        format!("{style} style: {prompt}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_instruction_interpolates_type_and_tone() {
        assert_eq!(
            writer_instruction("Blog Post", "Professional"),
            "You are a professional content writer. Write a Blog Post with a Professional tone."
        );
    }

    #[test]
    fn no_style_leaves_the_prompt_untouched() {
        assert_eq!(styled_image_prompt(NO_STYLE, "a red fox"), "a red fox");
    }

    #[test]
    fn style_is_prefixed() {
        assert_eq!(
            styled_image_prompt("Cyberpunk", "a red fox"),
            "Cyberpunk style: a red fox"
        );
    }

    #[test]
    fn generator_prompts_demand_raw_html() {
        assert!(WEBSITE_GENERATOR.contains("<!DOCTYPE html>"));
        assert!(APP_PROTOTYPE.contains("<!DOCTYPE html>"));
    }
}
