//! Prompt construction
//!
//! Both templates ask the model to mark headings with `**` and italics
//! with `*`, which is the convention the tokenizer understands.

use crate::request::{LessonRequest, OutputType};

/// Markup instruction appended to every prompt
const MARKUP_HINT: &str =
    "Use markdown style, for example, use **Heading** for headings and *italic* for italics.";

/// Build the generation prompt for a validated request
pub fn build_prompt(request: &LessonRequest) -> String {
    match request.output_type {
        OutputType::Ideas => ideas_prompt(request),
        OutputType::LessonPlan => lesson_plan_prompt(request),
    }
}

fn ideas_prompt(request: &LessonRequest) -> String {
    format!(
        "Develop a comprehensive and creative set of STEAM (Science, Technology, Engineering, \
Arts, Mathematics) integration possibilities for the topic: \"{topic}\" tailored exactly for \
learners of age {age} years. Keep the content aligned with the cognitive abilities of the age \
group. The activity should take about {time} minutes. Include real-world examples so the \
output is impactful and meaningful.\n\n\
The specified learning outcomes are:\n{outcomes}.\n\n\
Describe how to creatively and reliably integrate each of the STEAM disciplines into this \
topic, emphasizing hands-on activities, interdisciplinary projects and thought-provoking \
discussions. Stay close to the topic and be realistic. Structure the output with clear \
headings, sub-headings and bullet points where necessary.\n{hint}\n",
        topic = request.topic,
        age = request.age_group,
        time = request.time_minutes,
        outcomes = request.outcomes.join(", "),
        hint = MARKUP_HINT,
    )
}

fn lesson_plan_prompt(request: &LessonRequest) -> String {
    let location = request.location.as_deref().unwrap_or("Not specified");
    format!(
        "Create an optimized and relevant lesson plan for the topic: {topic} for learners who \
are {age}. The classroom session is {time} minutes long. Give a brief context about the \
location used in the output.\n\n\
The learning outcomes for this lesson are:\n{outcomes}.\n\n\
**Location Context:**\nLocation Name: {location}\n\n\
Generate a detailed lesson plan following the 5E model (Engage, Explore, Explain, Elaborate, \
Evaluate) with STEAM integrations. The lesson plan should include:\n\
*   **Title of the Lesson**\n\
*   **Learning Objectives** (measurable restatement of the outcomes)\n\
*   **Engage** (an opening activity that activates prior knowledge)\n\
*   **Explore** (a hands-on, exploratory activity)\n\
*   **Explain** (clear explanations, discussions or demonstrations)\n\
*   **Elaborate** (an extension activity applying the learning in new contexts)\n\
*   **Evaluate** (an assessment method with criteria or rubrics)\n\
*   **Materials Needed**\n\
*   **Detailed Lesson Procedure** (steps with timing for each phase)\n\
*   **STEAM Integration** (how each discipline connects within the activities)\n\
{hint}\n",
        topic = request.topic,
        age = request.age_group,
        time = request.time_minutes,
        outcomes = request.outcomes.join(", "),
        location = location,
        hint = MARKUP_HINT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Language;

    fn request(output_type: OutputType) -> LessonRequest {
        LessonRequest {
            topic: "Volcanoes".to_string(),
            outcomes: vec!["eruptions".to_string(), "plates".to_string()],
            age_group: "9".to_string(),
            output_type,
            time_minutes: 40,
            location: Some("Pokhara".to_string()),
            language: Language::English,
        }
    }

    #[test]
    fn test_ideas_prompt() {
        let prompt = build_prompt(&request(OutputType::Ideas));
        assert!(prompt.contains("\"Volcanoes\""));
        assert!(prompt.contains("age 9 years"));
        assert!(prompt.contains("about 40 minutes"));
        assert!(prompt.contains("eruptions, plates."));
        assert!(prompt.contains("**Heading**"));
        assert!(!prompt.contains("Pokhara"));
    }

    #[test]
    fn test_lesson_plan_prompt() {
        let prompt = build_prompt(&request(OutputType::LessonPlan));
        assert!(prompt.contains("Location Name: Pokhara"));
        assert!(prompt.contains("5E model"));
        assert!(prompt.contains("40 minutes long"));
    }

    #[test]
    fn test_lesson_plan_without_location() {
        let mut req = request(OutputType::LessonPlan);
        req.location = None;
        assert!(build_prompt(&req).contains("Location Name: Not specified"));
    }
}
