//! Audience profiles: static pain points, benefits and vocabulary per audience,
//! substituted into the prompt so the copy speaks to the reader's actual concerns.

use crate::generation::input::{Audience, Language};

#[derive(Debug, Clone, Copy)]
pub struct AudienceProfile {
    pub label: &'static str,
    pub pain_points: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub vocabulary: &'static [&'static str],
}

pub fn profile(audience: Audience, language: Language) -> AudienceProfile {
    match language {
        Language::Es => profile_es(audience),
        Language::En => profile_en(audience),
    }
}

fn profile_es(audience: Audience) -> AudienceProfile {
    match audience {
        Audience::Developers => AudienceProfile {
            label: "Desarrolladores de software",
            pain_points: &[
                "deuda técnica que frena cada entrega",
                "documentación escasa o desactualizada",
                "bugs que solo aparecen en producción",
                "cambiar de contexto constantemente",
            ],
            benefits: &[
                "código más mantenible",
                "menos tiempo depurando",
                "herramientas que automatizan lo repetitivo",
            ],
            vocabulary: &["refactorizar", "pipeline", "latencia", "pull request", "deploy"],
        },
        Audience::TechLeads => AudienceProfile {
            label: "Tech leads y responsables de ingeniería",
            pain_points: &[
                "equilibrar velocidad de entrega y calidad",
                "alinear al equipo en decisiones de arquitectura",
                "estimaciones que nunca se cumplen",
            ],
            benefits: &[
                "decisiones técnicas defendibles",
                "equipos más autónomos",
                "menos incidentes en producción",
            ],
            vocabulary: &["arquitectura", "trade-off", "roadmap", "SLO", "revisión técnica"],
        },
        Audience::Executives => AudienceProfile {
            label: "Directivos y C-level",
            pain_points: &[
                "inversión tecnológica sin retorno claro",
                "riesgo operativo y de seguridad",
                "dificultad para atraer y retener talento",
            ],
            benefits: &[
                "reducción de costes",
                "ventaja competitiva medible",
                "decisiones basadas en datos",
            ],
            vocabulary: &["ROI", "estrategia", "escalabilidad", "riesgo", "crecimiento"],
        },
        Audience::Recruiters => AudienceProfile {
            label: "Reclutadores y equipos de talento",
            pain_points: &[
                "evaluar perfiles técnicos sin ser técnico",
                "procesos de selección demasiado largos",
                "candidatos que rechazan ofertas al final",
            ],
            benefits: &[
                "entender qué buscan los perfiles técnicos",
                "ofertas más atractivas",
                "mejor encaje candidato-equipo",
            ],
            vocabulary: &["perfil", "stack", "seniority", "employer branding", "entrevista técnica"],
        },
        Audience::Founders => AudienceProfile {
            label: "Fundadores y emprendedores",
            pain_points: &[
                "recursos limitados para construir producto",
                "elegir la tecnología equivocada demasiado pronto",
                "escalar sin romper lo que ya funciona",
            ],
            benefits: &[
                "lanzar antes con menos riesgo",
                "decisiones técnicas que aguantan el crecimiento",
                "foco en lo que aporta valor al cliente",
            ],
            vocabulary: &["MVP", "product-market fit", "tracción", "runway", "iteración"],
        },
        Audience::General => AudienceProfile {
            label: "Profesionales en LinkedIn",
            pain_points: &[
                "falta de tiempo para mantenerse al día",
                "demasiada información y poca claridad",
            ],
            benefits: &[
                "ideas prácticas aplicables hoy",
                "aprender algo nuevo en dos minutos",
            ],
            vocabulary: &["claves", "aprendizajes", "productividad", "tendencias"],
        },
    }
}

fn profile_en(audience: Audience) -> AudienceProfile {
    match audience {
        Audience::Developers => AudienceProfile {
            label: "Software developers",
            pain_points: &[
                "technical debt slowing down every release",
                "missing or outdated documentation",
                "bugs that only show up in production",
                "constant context switching",
            ],
            benefits: &[
                "more maintainable code",
                "less time spent debugging",
                "tools that automate the repetitive work",
            ],
            vocabulary: &["refactor", "pipeline", "latency", "pull request", "deploy"],
        },
        Audience::TechLeads => AudienceProfile {
            label: "Tech leads and engineering managers",
            pain_points: &[
                "balancing delivery speed and quality",
                "aligning the team on architecture decisions",
                "estimates that never hold",
            ],
            benefits: &[
                "defensible technical decisions",
                "more autonomous teams",
                "fewer production incidents",
            ],
            vocabulary: &["architecture", "trade-off", "roadmap", "SLO", "design review"],
        },
        Audience::Executives => AudienceProfile {
            label: "Executives and C-level",
            pain_points: &[
                "technology spend without a clear return",
                "operational and security risk",
                "attracting and retaining talent",
            ],
            benefits: &[
                "lower costs",
                "measurable competitive advantage",
                "data-driven decisions",
            ],
            vocabulary: &["ROI", "strategy", "scalability", "risk", "growth"],
        },
        Audience::Recruiters => AudienceProfile {
            label: "Recruiters and talent teams",
            pain_points: &[
                "assessing technical profiles without a technical background",
                "hiring processes that drag on",
                "candidates declining offers at the last step",
            ],
            benefits: &[
                "understanding what technical candidates look for",
                "more compelling offers",
                "better candidate-team fit",
            ],
            vocabulary: &["profile", "stack", "seniority", "employer branding", "technical interview"],
        },
        Audience::Founders => AudienceProfile {
            label: "Founders and entrepreneurs",
            pain_points: &[
                "limited resources to build the product",
                "picking the wrong technology too early",
                "scaling without breaking what already works",
            ],
            benefits: &[
                "ship sooner with less risk",
                "technical choices that survive growth",
                "focus on what customers value",
            ],
            vocabulary: &["MVP", "product-market fit", "traction", "runway", "iteration"],
        },
        Audience::General => AudienceProfile {
            label: "Professionals on LinkedIn",
            pain_points: &[
                "no time to keep up with the field",
                "too much information, too little clarity",
            ],
            benefits: &[
                "practical ideas to apply today",
                "learn something new in two minutes",
            ],
            vocabulary: &["key takeaways", "lessons", "productivity", "trends"],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Audience; 6] = [
        Audience::Developers,
        Audience::TechLeads,
        Audience::Executives,
        Audience::Recruiters,
        Audience::Founders,
        Audience::General,
    ];

    #[test]
    fn test_every_profile_is_populated_in_both_languages() {
        for audience in ALL {
            for language in [Language::Es, Language::En] {
                let p = profile(audience, language);
                assert!(!p.label.is_empty());
                assert!(!p.pain_points.is_empty(), "{audience:?} {language:?}");
                assert!(!p.benefits.is_empty(), "{audience:?} {language:?}");
                assert!(!p.vocabulary.is_empty(), "{audience:?} {language:?}");
            }
        }
    }

    #[test]
    fn test_language_selects_variant() {
        assert_eq!(profile(Audience::Executives, Language::Es).label, "Directivos y C-level");
        assert_eq!(profile(Audience::Executives, Language::En).label, "Executives and C-level");
    }

    #[test]
    fn test_founders_vocabulary_mentions_mvp() {
        assert!(profile(Audience::Founders, Language::En).vocabulary.contains(&"MVP"));
    }
}
