//! Prompt construction: deterministic assembly of the generation instruction
//! from a `GenerationInput` and the source corpus. Pure string work, no I/O.

use crate::generation::audience::profile;
use crate::generation::input::{
    GenerationInput, Language, NarrativeTemplate, Theme, MAX_SLIDES, MIN_SLIDES,
};
use crate::generation::prompts::{
    CAROUSEL_PROMPT_EN, CAROUSEL_PROMPT_ES, OUTPUT_SCHEMA_EN, OUTPUT_SCHEMA_ES,
};
use crate::generation::tone::{depth_guide, objective_guide, tone_guide};
use crate::llm_client::prompts::{copywriter_persona, json_only_instruction};

/// Corpus beyond this many characters is cut before it reaches the prompt.
pub const MAX_CORPUS_CHARS: usize = 30_000;

/// Builds the full instruction string for the LLM.
pub fn build_prompt(input: &GenerationInput, corpus: &str) -> String {
    let language = input.language;
    let slides = input.slide_count.clamp(MIN_SLIDES, MAX_SLIDES) as usize;

    let structure = match input.narrative_template() {
        NarrativeTemplate::ProblemSolution => problem_solution_structure(slides, language),
        NarrativeTemplate::HowTo => how_to_structure(slides, language),
        NarrativeTemplate::CaseStudy => case_study_structure(slides, language),
        NarrativeTemplate::Generic => generic_structure(slides, language),
    };

    let (template, schema) = match language {
        Language::Es => (CAROUSEL_PROMPT_ES, OUTPUT_SCHEMA_ES),
        Language::En => (CAROUSEL_PROMPT_EN, OUTPUT_SCHEMA_EN),
    };

    let audience = profile(input.audience, language);
    let tone = tone_guide(input.tone, language);
    let keywords = input.clean_keywords();
    let keywords = if keywords.is_empty() {
        match language {
            Language::Es => "ninguna en particular".to_string(),
            Language::En => "none in particular".to_string(),
        }
    } else {
        keywords.join(", ")
    };

    template
        .replace("{structure}", &structure)
        .replace("{persona}", copywriter_persona(language))
        .replace("{slide_count}", &slides.to_string())
        .replace("{audience_label}", audience.label)
        .replace("{pain_points}", &audience.pain_points.join("; "))
        .replace("{benefits}", &audience.benefits.join("; "))
        .replace("{vocabulary}", &audience.vocabulary.join(", "))
        .replace("{voice}", tone.voice)
        .replace("{hook_style}", tone.hook_style)
        .replace("{avoid}", &tone.avoid.join(", "))
        .replace("{objective}", objective_guide(input.objective, language))
        .replace("{depth}", depth_guide(input.technical_depth, language))
        .replace("{max_bullets}", &input.copy_length.max_bullets().to_string())
        .replace("{max_words}", &input.copy_length.max_words().to_string())
        .replace("{visual_theme}", visual_theme(input.theme, language))
        .replace("{schema}", schema)
        .replace("{json_only}", json_only_instruction(language))
        .replace("{keywords}", &keywords)
        .replace("{corpus}", truncate_chars(corpus.trim(), MAX_CORPUS_CHARS))
}

fn visual_theme(theme: Theme, language: Language) -> &'static str {
    match (theme, language) {
        (Theme::Light, Language::Es) => "fondo claro, tipografía oscura, acentos de color de marca",
        (Theme::Light, Language::En) => "light background, dark type, brand-colour accents",
        (Theme::Dark, Language::Es) => "fondo oscuro, tipografía clara, acentos de color de marca",
        (Theme::Dark, Language::En) => "dark background, light type, brand-colour accents",
    }
}

/// "diapositiva 3" / "diapositivas 3-6" (or the English equivalent).
fn slide_range(from: usize, to: usize, language: Language) -> String {
    match (from == to, language) {
        (true, Language::Es) => format!("Diapositiva {from}"),
        (true, Language::En) => format!("Slide {from}"),
        (false, Language::Es) => format!("Diapositivas {from}-{to}"),
        (false, Language::En) => format!("Slides {from}-{to}"),
    }
}

fn problem_solution_structure(slides: usize, language: Language) -> String {
    let middle = slide_range(3, slides - 1, language);
    match language {
        Language::Es => format!(
            "- Diapositiva 1: gancho que nombra el problema en palabras de la audiencia\n\
             - Diapositiva 2: por qué el problema importa y qué cuesta no resolverlo\n\
             - {middle}: la solución, un paso o principio por diapositiva\n\
             - Diapositiva {slides}: resumen de la solución y llamada a la acción"
        ),
        Language::En => format!(
            "- Slide 1: hook naming the problem in the audience's own words\n\
             - Slide 2: why the problem matters and what ignoring it costs\n\
             - {middle}: the solution, one step or principle per slide\n\
             - Slide {slides}: solution recap and call to action"
        ),
    }
}

fn how_to_structure(slides: usize, language: Language) -> String {
    let steps = slides - 2;
    let middle = slide_range(2, slides - 1, language);
    match language {
        Language::Es => format!(
            "- Diapositiva 1: promesa clara de lo que el lector sabrá hacer al terminar\n\
             - {middle}: {steps} pasos numerados, uno por diapositiva, cada uno accionable\n\
             - Diapositiva {slides}: repaso de los pasos y llamada a la acción"
        ),
        Language::En => format!(
            "- Slide 1: a clear promise of what the reader will be able to do\n\
             - {middle}: {steps} numbered steps, one per slide, each actionable\n\
             - Slide {slides}: recap of the steps and call to action"
        ),
    }
}

fn case_study_structure(slides: usize, language: Language) -> String {
    let actions = slide_range(3, slides - 2, language);
    let results = slides - 1;
    match language {
        Language::Es => format!(
            "- Diapositiva 1: gancho con el resultado más llamativo del caso\n\
             - Diapositiva 2: contexto y reto de partida\n\
             - {actions}: qué se hizo, una decisión por diapositiva\n\
             - Diapositiva {results}: resultados con métricas de la fuente\n\
             - Diapositiva {slides}: lecciones aprendidas y llamada a la acción"
        ),
        Language::En => format!(
            "- Slide 1: hook with the case's most striking result\n\
             - Slide 2: context and starting challenge\n\
             - {actions}: what was done, one decision per slide\n\
             - Slide {results}: results with metrics from the source\n\
             - Slide {slides}: lessons learned and call to action"
        ),
    }
}

fn generic_structure(slides: usize, language: Language) -> String {
    let middle = slide_range(2, slides - 1, language);
    match language {
        Language::Es => format!(
            "- Diapositiva 1: gancho que haga detenerse al lector\n\
             - {middle}: las ideas más valiosas de la fuente, una por diapositiva\n\
             - Diapositiva {slides}: conclusión y llamada a la acción"
        ),
        Language::En => format!(
            "- Slide 1: a hook that makes the reader stop scrolling\n\
             - {middle}: the most valuable ideas from the source, one per slide\n\
             - Slide {slides}: conclusion and call to action"
        ),
    }
}

/// Cuts `text` to at most `max` characters on a char boundary.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => {
            tracing::warn!("Corpus truncated to {max} characters");
            &text[..idx]
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::input::{Audience, CopyLength, Tone};

    fn input(template: &str, language: Language) -> GenerationInput {
        let mut input: GenerationInput =
            serde_json::from_value(serde_json::json!({ "sourceText": "x" })).unwrap();
        input.template = template.to_string();
        input.language = language;
        input.slide_count = 6;
        input
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let i = input("how-to", Language::En);
        assert_eq!(build_prompt(&i, "corpus"), build_prompt(&i, "corpus"));
    }

    #[test]
    fn test_no_placeholders_left_behind() {
        for template in ["problem-solution", "how-to", "case-study", "anything"] {
            for language in [Language::Es, Language::En] {
                let prompt = build_prompt(&input(template, language), "body");
                for placeholder in [
                    "{persona}", "{structure}", "{slide_count}", "{audience_label}",
                    "{pain_points}", "{benefits}", "{vocabulary}", "{voice}",
                    "{hook_style}", "{avoid}", "{objective}", "{depth}", "{max_bullets}",
                    "{max_words}", "{keywords}", "{visual_theme}", "{schema}",
                    "{corpus}", "{json_only}",
                ] {
                    assert!(
                        !prompt.contains(placeholder),
                        "{placeholder} left in {template} / {language:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_template_selects_structure() {
        let how_to = build_prompt(&input("how-to", Language::En), "c");
        assert!(how_to.contains("4 numbered steps"));

        let case = build_prompt(&input("case-study", Language::En), "c");
        assert!(case.contains("Slide 5: results with metrics"));

        let problem = build_prompt(&input("problem-solution", Language::En), "c");
        assert!(problem.contains("Slides 3-5: the solution"));

        let generic = build_prompt(&input("top-10", Language::En), "c");
        assert!(generic.contains("stop scrolling"));
    }

    #[test]
    fn test_language_selects_spanish_variant() {
        let prompt = build_prompt(&input("how-to", Language::Es), "c");
        assert!(prompt.contains("EXACTAMENTE 6 diapositivas"));
        assert!(prompt.contains("Responde ÚNICAMENTE"));
        assert!(prompt.contains("\"postCopies\""));
    }

    #[test]
    fn test_schema_embedded_verbatim() {
        let prompt = build_prompt(&input("how-to", Language::En), "c");
        assert!(prompt.contains(OUTPUT_SCHEMA_EN));
    }

    #[test]
    fn test_schema_keeps_hashtag_examples_and_closing_brace() {
        for (schema, tag) in [(OUTPUT_SCHEMA_ES, "\"#ejemplo\""), (OUTPUT_SCHEMA_EN, "\"#example\"")] {
            assert!(schema.contains(tag));
            assert!(schema.contains("\"#linkedin\""));
            assert!(schema.contains("\"schedule\""));
            assert!(schema.trim_end().ends_with('}'));
        }
        let prompt = build_prompt(&input("how-to", Language::Es), "c");
        assert!(prompt.contains("\"#ejemplo\", \"#linkedin\""));
    }

    #[test]
    fn test_audience_tone_and_length_are_substituted() {
        let mut i = input("generic", Language::En);
        i.audience = Audience::Founders;
        i.tone = Tone::Provocative;
        i.copy_length = CopyLength::Short;
        i.keywords = vec!["Rust".to_string(), "rust".to_string(), "async".to_string()];

        let prompt = build_prompt(&i, "c");

        assert!(prompt.contains("Founders and entrepreneurs"));
        assert!(prompt.contains("product-market fit"));
        assert!(prompt.contains("counter-intuitive"));
        assert!(prompt.contains("At most 3 bullets per slide and 12 words per bullet"));
        assert!(prompt.contains("Keywords to include naturally: Rust, async"));
    }

    #[test]
    fn test_corpus_is_not_scanned_for_placeholders() {
        let prompt = build_prompt(&input("how-to", Language::En), "literal {slide_count} text");
        assert!(prompt.contains("literal {slide_count} text"));
    }

    #[test]
    fn test_minimum_slide_count_renders_single_slide_ranges() {
        let mut i = input("case-study", Language::Es);
        i.slide_count = 5;
        let prompt = build_prompt(&i, "c");
        assert!(prompt.contains("Diapositiva 3: qué se hizo"));
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("ñandú", 3), "ñan");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
