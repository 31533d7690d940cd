//! Voice calibration: maps tone, objective and technical depth to the
//! concrete writing guidance embedded in the prompt.
//!
//! The closing slide's call to action is driven by the objective, never by the
//! tone: a provocative carousel that aims to educate still closes with a learning CTA.

use crate::generation::input::{Language, Objective, TechnicalDepth, Tone};

#[derive(Debug, Clone)]
pub struct ToneGuide {
    pub voice: &'static str,
    pub hook_style: &'static str,
    pub avoid: Vec<&'static str>,
}

pub fn tone_guide(tone: Tone, language: Language) -> ToneGuide {
    match (tone, language) {
        (Tone::Professional, Language::Es) => ToneGuide {
            voice: "profesional, claro y preciso; frases cortas y sin jerga innecesaria",
            hook_style: "un dato o afirmación concreta que despierte interés",
            avoid: vec!["emojis en exceso", "exclamaciones", "coloquialismos"],
        },
        (Tone::Professional, Language::En) => ToneGuide {
            voice: "professional, clear and precise; short sentences, no needless jargon",
            hook_style: "a concrete fact or claim that sparks interest",
            avoid: vec!["excessive emojis", "exclamation marks", "slang"],
        },
        (Tone::Conversational, Language::Es) => ToneGuide {
            voice: "cercano y conversacional, tuteando al lector como a un colega",
            hook_style: "una pregunta directa al lector",
            avoid: vec!["lenguaje corporativo", "frases de más de 20 palabras"],
        },
        (Tone::Conversational, Language::En) => ToneGuide {
            voice: "friendly and conversational, talking to the reader like a colleague",
            hook_style: "a direct question to the reader",
            avoid: vec!["corporate speak", "sentences over 20 words"],
        },
        (Tone::Inspirational, Language::Es) => ToneGuide {
            voice: "inspirador y positivo, centrado en lo que el lector puede lograr",
            hook_style: "una visión del resultado que el lector quiere alcanzar",
            avoid: vec!["clichés motivacionales vacíos", "promesas exageradas"],
        },
        (Tone::Inspirational, Language::En) => ToneGuide {
            voice: "inspiring and positive, focused on what the reader can achieve",
            hook_style: "a picture of the outcome the reader wants",
            avoid: vec!["empty motivational clichés", "overblown promises"],
        },
        (Tone::Provocative, Language::Es) => ToneGuide {
            voice: "provocador y directo, cuestionando ideas establecidas con argumentos",
            hook_style: "una afirmación contraintuitiva que rompa una creencia común",
            avoid: vec!["ataques personales", "afirmaciones sin respaldo en la fuente"],
        },
        (Tone::Provocative, Language::En) => ToneGuide {
            voice: "provocative and direct, challenging established ideas with arguments",
            hook_style: "a counter-intuitive claim that breaks a common belief",
            avoid: vec!["personal attacks", "claims the source does not support"],
        },
    }
}

/// What the carousel is for, and the call to action the closing slide should carry.
pub fn objective_guide(objective: Objective, language: Language) -> &'static str {
    match (objective, language) {
        (Objective::Educate, Language::Es) => {
            "educar: cada diapositiva enseña una idea concreta; cierra invitando a guardar el carrusel"
        }
        (Objective::Educate, Language::En) => {
            "educate: every slide teaches one concrete idea; close by inviting readers to save the carousel"
        }
        (Objective::Engage, Language::Es) => {
            "generar conversación: plantea preguntas y cierra pidiendo la opinión del lector en comentarios"
        }
        (Objective::Engage, Language::En) => {
            "spark conversation: raise questions and close by asking for the reader's opinion in the comments"
        }
        (Objective::Leads, Language::Es) => {
            "captar leads: muestra el valor y cierra con una invitación clara a escribir o visitar un enlace"
        }
        (Objective::Leads, Language::En) => {
            "generate leads: show the value and close with a clear invitation to reach out or visit a link"
        }
        (Objective::Authority, Language::Es) => {
            "construir autoridad: aporta criterio propio y experiencia; cierra invitando a seguir al autor"
        }
        (Objective::Authority, Language::En) => {
            "build authority: share informed judgement and experience; close by inviting readers to follow the author"
        }
    }
}

pub fn depth_guide(depth: TechnicalDepth, language: Language) -> &'static str {
    match (depth, language) {
        (TechnicalDepth::Basic, Language::Es) => {
            "básico: sin jerga técnica; explica cualquier término con una analogía cotidiana"
        }
        (TechnicalDepth::Basic, Language::En) => {
            "basic: no technical jargon; explain any term with an everyday analogy"
        }
        (TechnicalDepth::Intermediate, Language::Es) => {
            "intermedio: usa términos técnicos habituales sin definirlos, evita detalles de implementación"
        }
        (TechnicalDepth::Intermediate, Language::En) => {
            "intermediate: use common technical terms without defining them, skip implementation details"
        }
        (TechnicalDepth::Advanced, Language::Es) => {
            "avanzado: incluye detalles de implementación, métricas y compromisos técnicos"
        }
        (TechnicalDepth::Advanced, Language::En) => {
            "advanced: include implementation details, metrics and technical trade-offs"
        }
    }
}
