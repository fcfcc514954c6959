//! Score banding — maps a numeric screening score to one of three fixed
//! severity bands with the clinical copy shown in the report.
//!
//! The band text is screening guidance, not diagnosis, and is rendered
//! verbatim; nothing here is derived or configurable.

use serde_json::Value;

/// Category, description and recommendation for one severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBand {
    pub category: &'static str,
    pub description: &'static str,
    pub recommendation: &'static str,
}

const HIGH: ScoreBand = ScoreBand {
    category: "Alta Probabilidade de Traços no Espectro",
    description: "O resultado do seu teste indica uma forte presença de traços avaliados pelo Lumispect. É crucial entender que esta é apenas uma triagem, mas o alinhamento com o escore máximo sugere que buscar uma avaliação profissional formal pode ser o passo mais importante para o seu autoconhecimento e bem-estar.",
    recommendation: "Recomendamos fortemente a busca por profissionais de saúde mental (Neurologista, Psiquiatra ou Psiquiatra com experiência em TEA) para um diagnóstico formal e início de um plano de suporte. Temos uma lista de clínicas e especialistas parceiros que podem auxiliar neste processo.",
};

const MODERATE: ScoreBand = ScoreBand {
    category: "Sinais Moderados: Traços de Rigidez e Sensibilidade",
    description: "Seu resultado indica uma presença moderada de traços relacionados ao espectro. Embora o Lumispect não seja diagnóstico, esses traços podem impactar áreas da sua vida. O autoconhecimento é a chave.",
    recommendation: "Se os traços causarem desconforto significativo, uma consulta com um profissional de saúde mental é o caminho. Procure informações confiáveis e continue a se observar. Considere conversar com um psicólogo para explorar esses traços em profundidade.",
};

const LOW: ScoreBand = ScoreBand {
    category: "Traços Comuns ou Baixa Probabilidade",
    description: "O seu resultado sugere que as suas experiências se alinham mais com o padrão neurotípico, com pouca intensidade nos traços avaliados. Continue focando no seu bem-estar geral e no autoconhecimento.",
    recommendation: "Se os traços causarem desconforto significativo, uma consulta com um profissional de saúde mental é o caminho. Procure informações confiáveis e continue a se observar. Considere conversar com um psicólogo para explorar esses traços em profundidade.",
};

/// Classifies a score into its band. Lower bounds are inclusive:
/// `>= 70` high, `40..70` moderate, `< 40` low.
pub fn classify(score: f64) -> ScoreBand {
    if score >= 70.0 {
        HIGH
    } else if score >= 40.0 {
        MODERATE
    } else {
        LOW
    }
}

/// Coerces the wire-format score into a number.
///
/// Numbers pass through; strings are parsed as f64. Anything unparsable or of
/// any other JSON type silently becomes 0 (lowest band) rather than erroring.
/// Deliberate leniency carried over from the original service.
pub fn coerce_score(score: &Value) -> f64 {
    match score {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_high_band_at_and_above_70() {
        assert_eq!(classify(70.0).category, HIGH.category);
        assert_eq!(classify(85.0).category, HIGH.category);
        assert_eq!(classify(100.0).category, HIGH.category);
    }

    #[test]
    fn test_moderate_band_between_40_and_70() {
        assert_eq!(classify(40.0).category, MODERATE.category);
        assert_eq!(classify(55.5).category, MODERATE.category);
        assert_eq!(classify(69.99).category, MODERATE.category);
    }

    #[test]
    fn test_low_band_below_40() {
        assert_eq!(classify(39.99).category, LOW.category);
        assert_eq!(classify(0.0).category, LOW.category);
    }

    #[test]
    fn test_numeric_score_passes_through() {
        assert_eq!(coerce_score(&json!(85)), 85.0);
        assert_eq!(coerce_score(&json!(42.5)), 42.5);
    }

    #[test]
    fn test_string_score_is_parsed() {
        assert_eq!(coerce_score(&json!("85")), 85.0);
        assert_eq!(coerce_score(&json!("42.5")), 42.5);
    }

    #[test]
    fn test_unparsable_score_defaults_to_zero() {
        assert_eq!(coerce_score(&json!("abc")), 0.0);
        assert_eq!(coerce_score(&Value::Null), 0.0);
        assert_eq!(coerce_score(&json!({})), 0.0);
        assert_eq!(coerce_score(&json!([1, 2])), 0.0);
        assert_eq!(coerce_score(&json!(true)), 0.0);
    }

    #[test]
    fn test_unparsable_score_lands_in_low_band() {
        let band = classify(coerce_score(&json!("not-a-number")));
        assert_eq!(band.category, LOW.category);
    }
}
