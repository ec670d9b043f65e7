//! Scenario Content
//!
//! The scripted flood scenario and the fallback list shown on the results
//! page when no navigation state survived.

use crate::models::{Choice, Question, QuestionSummary};

/// Situation announced with the first timeline entry
pub const INITIAL_SITUATION: &str = "Flooding";

pub fn flood_scenario() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            text: "Vous vivez dans une maison près d'une rivière, une zone connue pour être inondable. \
                   La météo annonce de fortes pluies depuis plusieurs jours. Vous recevez une alerte officielle \
                   (Vigicrues / Météo-France / FR-Alert) : risque imminent de crue et d'inondation."
                .to_string(),
            choices: vec![
                Choice::fixed(1, "Commencer à monter les objets de valeur et les biens essentiels à l'étage."),
                Choice::fixed(2, "Ignorer l'alerte, pensant que ce ne sera pas si grave cette fois-ci."),
                Choice::fixed(3, "Descendre à la cave pour essayer de protéger les affaires qui y sont stockées."),
                Choice::free_text(4),
            ],
        },
        Question {
            id: 2,
            text: "L'eau commence à s'infiltrer au rez-de-chaussée. Le niveau monte rapidement.".to_string(),
            choices: vec![
                Choice::fixed(1, "Préparer rapidement le kit d'urgence (eau, nourriture, radio, lampe, papiers, médicaments...)."),
                Choice::fixed(2, "Tenter de partir en voiture pour rejoindre des proches sur les hauteurs."),
                Choice::fixed(3, "Essayer de bloquer l'eau en calfeutrant les portes avec des serviettes et des sacs de sable du garage."),
                Choice::free_text(4),
            ],
        },
        Question {
            id: 3,
            text: "Le rez-de-chaussée est maintenant inondé (plus d'un mètre d'eau). \
                   Vous êtes réfugiés à l'étage avec votre famille."
                .to_string(),
            choices: vec![
                Choice::fixed(1, "Vous poster près d'une fenêtre à l'étage et utiliser une lampe de poche pour signaler votre présence aux secours."),
                Choice::fixed(2, "Descendre prudemment pour évaluer les dégâts et voir si quelque chose peut encore être sauvé."),
                Choice::fixed(3, "Essayer d'appeler les secours avec le téléphone fixe, même s'il ne semble plus fonctionner."),
                Choice::free_text(4),
            ],
        },
    ]
}

/// Shown when the results page is opened without any answers
pub fn fallback_questions() -> Vec<QuestionSummary> {
    [
        (1, "What should you include in your emergency kit?"),
        (2, "What is the recommended amount of water to store per person per day?"),
        (3, "Where is the safest place during an earthquake?"),
    ]
    .into_iter()
    .map(|(id, text)| QuestionSummary { id, text: text.to_string() })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_shape() {
        let questions = flood_scenario();
        assert_eq!(questions.len(), 3);
        for question in &questions {
            let fixed = question.choices.iter().filter(|c| !c.free_text).count();
            let free = question.choices.iter().filter(|c| c.free_text).count();
            assert_eq!((fixed, free), (3, 1), "question {}", question.id);
        }
    }
}
