// Prompt templates for carousel generation.
// Placeholders are replaced by prompt_builder; `{corpus}` is always replaced last
// so user content is never scanned for placeholders.

/// Output schema embedded verbatim in the Spanish prompt.
pub const OUTPUT_SCHEMA_ES: &str = r##"{
  "slides": [
    {
      "title": "Título breve y potente de la diapositiva",
      "bullets": ["Idea clave 1", "Idea clave 2"],
      "visual": "Dirección visual: qué imagen, icono o gráfico acompaña la diapositiva"
    }
  ],
  "postCopies": [
    { "audience": "general", "text": "Texto del post que acompaña al carrusel" }
  ],
  "hashtags": ["#ejemplo", "#linkedin"],
  "schedule": ["Martes 08:30 - inicio de jornada laboral"]
}"##;

/// Output schema embedded verbatim in the English prompt.
pub const OUTPUT_SCHEMA_EN: &str = r##"{
  "slides": [
    {
      "title": "Short, punchy slide title",
      "bullets": ["Key idea 1", "Key idea 2"],
      "visual": "Visual direction: which image, icon or chart goes with the slide"
    }
  ],
  "postCopies": [
    { "audience": "general", "text": "Post copy that accompanies the carousel" }
  ],
  "hashtags": ["#example", "#linkedin"],
  "schedule": ["Tuesday 08:30 - start of the work day"]
}"##;

pub const CAROUSEL_PROMPT_ES: &str = r##"{persona}

TAREA: crea un carrusel de LinkedIn de EXACTAMENTE {slide_count} diapositivas, en español, para la audiencia "{audience_label}", basado únicamente en el CONTENIDO FUENTE.

ESTRUCTURA NARRATIVA:
{structure}

AUDIENCIA:
- Problemas que le preocupan: {pain_points}
- Beneficios que busca: {benefits}
- Vocabulario que reconoce: {vocabulary}

VOZ:
- Tono: {voice}
- Gancho de la primera diapositiva: {hook_style}
- Evita: {avoid}
- Objetivo: {objective}
- Profundidad técnica: {depth}

REGLAS DE FORMATO:
1. Exactamente {slide_count} elementos en "slides"
2. Máximo {max_bullets} viñetas por diapositiva y {max_words} palabras por viñeta
3. Títulos de 8 palabras como máximo
4. Palabras clave a incluir de forma natural: {keywords}
5. Estilo visual del carrusel: {visual_theme}
6. Incluye 3 textos en "postCopies" (uno por variante de audiencia), entre 5 y 10 "hashtags" y 3 sugerencias en "schedule"

ESQUEMA DE SALIDA:
{schema}

CONTENIDO FUENTE:
"""
{corpus}
"""

{json_only}"##;

pub const CAROUSEL_PROMPT_EN: &str = r##"{persona}

TASK: create a LinkedIn carousel of EXACTLY {slide_count} slides, in English, for the audience "{audience_label}", based solely on the SOURCE CONTENT.

NARRATIVE STRUCTURE:
{structure}

AUDIENCE:
- Pain points: {pain_points}
- Benefits they look for: {benefits}
- Vocabulary they recognise: {vocabulary}

VOICE:
- Tone: {voice}
- First-slide hook: {hook_style}
- Avoid: {avoid}
- Objective: {objective}
- Technical depth: {depth}

FORMAT RULES:
1. Exactly {slide_count} items in "slides"
2. At most {max_bullets} bullets per slide and {max_words} words per bullet
3. Titles of 8 words or fewer
4. Keywords to include naturally: {keywords}
5. Carousel visual style: {visual_theme}
6. Include 3 entries in "postCopies" (one per audience variant), 5 to 10 "hashtags" and 3 "schedule" suggestions

OUTPUT SCHEMA:
{schema}

SOURCE CONTENT:
"""
{corpus}
"""

{json_only}"##;
