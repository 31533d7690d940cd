// Shared prompt fragments. Feature-specific prompts live next to the feature
// (see generation/prompts.rs); this file holds the cross-cutting pieces.

use crate::generation::input::Language;

/// Closing instruction appended to every generation prompt: JSON only, no prose.
pub fn json_only_instruction(language: Language) -> &'static str {
    match language {
        Language::Es => "Responde ÚNICAMENTE con un objeto JSON válido que siga exactamente \
            el esquema indicado. No añadas texto antes ni después del JSON. \
            No inventes datos que no aparezcan en el contenido fuente.",
        Language::En => "Respond ONLY with a valid JSON object that follows the schema above \
            exactly. Do NOT add any text before or after the JSON. \
            Do NOT invent facts that are not present in the source content.",
    }
}

/// Persona line opening every generation prompt.
pub fn copywriter_persona(language: Language) -> &'static str {
    match language {
        Language::Es => "Eres un copywriter experto en LinkedIn especializado en carruseles \
            que convierten contenido técnico en piezas claras, memorables y accionables.",
        Language::En => "You are an expert LinkedIn copywriter who specializes in carousels \
            that turn technical content into clear, memorable and actionable posts.",
    }
}
