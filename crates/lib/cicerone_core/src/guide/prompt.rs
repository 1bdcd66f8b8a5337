//! Prompt assembly for the guide persona.
//!
//! The persona text and the guide task template are fixed; only the city
//! is interpolated, so prompts are deterministic for a given input.

/// System framing used for chat exchanges.
pub const PERSONA: &str = "You are Amelie, a helpful and friendly travel guide. \
    Continue the conversation naturally based on the user's questions.";

/// Sampling temperature for the one-shot guide request.
pub const GUIDE_TEMPERATURE: f32 = 0.8;

/// Sampling temperature for chat exchanges.
pub const CHAT_TEMPERATURE: f32 = 0.7;

/// Build the fixed persona-and-task prompt for a city guide.
pub fn guide_prompt(city: &str) -> String {
    format!(
        "**Persona:** You are 'Amelie', a witty, modern, and super-friendly travel blogger.\n\
         \n\
         **Task:** Generate a 'Top 6 Attractions' list for {city}.\n\
         For each attraction, provide: an emoji, **Name**, **Location**, **Why it's a must-visit**, and a **Pro Tip**.\n\
         \n\
         **Crucially**, after the list, conclude with a friendly question and mention that the user can ask you to **save a place** to their favorites list.\n\
         Example closer: \"So, what's on your mind? Ask me for more details on any of these, or just say **'save The Louvre'** to add it to your list! We can also switch languages if you prefer.\""
    )
}

/// Build the system framing for a chat exchange, optionally anchored to a
/// city so replies stay on topic.
pub fn chat_system(city_context: Option<&str>) -> String {
    match city_context {
        Some(city) if !city.trim().is_empty() => format!(
            "{PERSONA} The traveller is currently planning a trip to {city}; \
             keep your answers anchored there unless asked otherwise."
        ),
        _ => PERSONA.to_string(),
    }
}
