//! Static learning recommendations shown after a quiz ends.

use crate::model::LevelNumber;

/// What to study to reach a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub level: LevelNumber,
    pub title: &'static str,
    pub concepts: [&'static str; 4],
}

/// Topics offered once every level has been reached.
pub const MASTERY_TOPICS: [&str; 4] = [
    "Stay current with emerging AI regulations and governance frameworks",
    "Explore industry-specific AI applications in your field",
    "Consider AI ethics and philosophical implications",
    "Mentor others in their AI learning journey",
];

static RECOMMENDATIONS: [Recommendation; 6] = [
    Recommendation {
        level: LevelNumber(1),
        title: "AI Curious",
        concepts: [
            "Learn to distinguish AI (systems that simulate human intelligence) from simple automation (rule-based tasks) and smart devices (pre-programmed responses). Focus on understanding AI's ability to learn, adapt, and make decisions from data rather than just following instructions.",
            "Identify AI applications you already use: recommendation engines (Netflix, Spotify), virtual assistants (Siri, Alexa), navigation apps (Google Maps), and content filters (email spam detection). Practice recognizing AI-powered features in everyday technology.",
            "Understand that automation follows fixed rules, smart devices use sensors with predetermined responses, while AI learns patterns and makes predictions. Compare a programmable thermostat (smart) vs. a learning thermostat like Nest (AI) that adapts to your behavior.",
            "Master prompt engineering basics: be specific and detailed, provide context and examples, use clear instructions with desired output format. Practice iterating prompts based on AI responses to achieve better results.",
        ],
    },
    Recommendation {
        level: LevelNumber(2),
        title: "LLM Explorer",
        concepts: [
            "Understand that AI learns by finding patterns in large datasets through algorithms that adjust mathematical weights and parameters. Focus on the concept that more diverse, high-quality data typically leads to better AI performance and generalization.",
            "Learn why data quality matters more than quantity: clean, representative, and unbiased datasets prevent AI from learning incorrect patterns. Study examples of how poor training data leads to biased or ineffective AI systems in real-world applications.",
            "Explore how AI identifies patterns (like recognizing faces in photos) and uses them for predictions (recommending products based on past purchases). Practice identifying what patterns an AI system might use for different tasks like fraud detection or medical diagnosis.",
            "Understand neural networks as interconnected nodes that process information similarly to brain neurons, with connections strengthening through learning. Focus on how deep learning uses multiple layers to recognize increasingly complex patterns from simple features to abstract concepts.",
        ],
    },
    Recommendation {
        level: LevelNumber(3),
        title: "Big Data Dabbler",
        concepts: [
            "Master supervised learning (learning from labeled examples like email marked as spam/not spam) vs. unsupervised learning (finding hidden patterns without labels, like customer segmentation). Practice identifying which approach fits different business problems.",
            "Understand training (teaching AI with historical data) vs. inference (AI making predictions on new, unseen data). Learn why models perform differently between training and real-world deployment, and how to evaluate this performance gap.",
            "Focus on data quality dimensions: accuracy, completeness, consistency, and relevance to the problem being solved. Learn to identify how missing data, outliers, and measurement errors directly impact AI model reliability and decision-making.",
            "Learn to identify bias sources: historical bias in data, sampling bias, and confirmation bias in data collection. Understand techniques like data auditing, diverse sampling, and bias testing to create more fair and representative AI systems.",
        ],
    },
    Recommendation {
        level: LevelNumber(4),
        title: "AI Literate",
        concepts: [
            "Understand tokens as text chunks (words or word parts) that LLMs process, and context windows as the maximum tokens the model can consider at once (typically 4K-128K tokens). Learn to estimate token usage and manage conversation length for optimal performance.",
            "Master temperature settings: low values (0.1-0.3) for consistent, factual responses; high values (0.7-1.0) for creative, varied outputs. Practice adjusting temperature based on whether you need precise information or creative brainstorming.",
            "Learn fine-tuning techniques: training pre-trained models on specific datasets to improve performance for particular tasks or domains. Understand when fine-tuning is worth the cost versus using prompt engineering or retrieval-augmented generation.",
            "Focus on API cost optimization: monitor token usage, batch requests efficiently, choose appropriate model sizes for tasks, and implement caching for repeated queries. Learn to balance performance requirements with cost constraints in production applications.",
        ],
    },
    Recommendation {
        level: LevelNumber(5),
        title: "Gen AI Guru",
        concepts: [
            "Master RAG architecture: combining LLMs with external knowledge retrieval to provide current, accurate information beyond training data. Learn to implement vector databases, embedding models, and retrieval strategies for domain-specific applications.",
            "Understand grounding techniques: anchoring AI responses in verifiable sources, citations, and real-time data to improve accuracy and reliability. Practice implementing fact-checking workflows and source attribution in AI-generated content.",
            "Learn hallucination detection and mitigation: identifying when AI generates plausible but incorrect information, implementing confidence scoring, and using techniques like chain-of-thought reasoning to improve factual accuracy. Focus on validation strategies for critical applications.",
            "Distinguish discriminative AI (classifies or predicts from existing data) from generative AI (creates new content like text, images, code). Understand when to use each approach and how to combine them for comprehensive AI solutions.",
        ],
    },
    Recommendation {
        level: LevelNumber(6),
        title: "AI Strategist",
        concepts: [
            "Develop AI ROI frameworks: calculate implementation costs, productivity gains, and risk mitigation value while considering long-term strategic advantages. Focus on measuring both quantitative benefits and qualitative improvements in decision-making and innovation capacity.",
            "Master change management for AI adoption: address employee concerns, provide targeted training, establish clear governance, and create feedback loops. Learn to manage cultural resistance and build AI literacy across different organizational levels and functions.",
            "Implement responsible AI frameworks: establish bias detection protocols, ensure algorithmic transparency, maintain human oversight, and create accountability mechanisms. Focus on building ethical guidelines, audit processes, and stakeholder trust in AI systems.",
            "Design AI scaling strategies: create reusable frameworks, establish centers of excellence, develop internal capabilities, and build vendor management processes. Learn to balance centralized AI governance with distributed implementation across business units.",
        ],
    },
];

/// Recommendation for reaching `level`.
#[must_use]
pub fn recommendation(level: LevelNumber) -> &'static Recommendation {
    &RECOMMENDATIONS[level.index()]
}

/// Guidance shown on the completion screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextSteps {
    /// Study plan for the level after the one reached.
    Advance(&'static Recommendation),
    /// Every level reached; open-ended topics instead.
    Mastered(&'static [&'static str; 4]),
}

/// Pick the guidance for a player who reached `reached`.
#[must_use]
pub fn next_steps(reached: LevelNumber) -> NextSteps {
    match reached.next() {
        Some(target) => NextSteps::Advance(recommendation(target)),
        None => NextSteps::Mastered(&MASTERY_TOPICS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_keyed_by_level() {
        for n in 1..=6 {
            let level = LevelNumber::new(n).unwrap();
            assert_eq!(recommendation(level).level, level);
        }
        assert_eq!(recommendation(LevelNumber::FIRST).title, "AI Curious");
    }

    #[test]
    fn next_steps_point_at_following_level() {
        let NextSteps::Advance(rec) = next_steps(LevelNumber::FIRST) else {
            panic!("expected a recommendation");
        };
        assert_eq!(rec.title, "LLM Explorer");

        let NextSteps::Advance(rec) = next_steps(LevelNumber::new(5).unwrap()) else {
            panic!("expected a recommendation");
        };
        assert_eq!(rec.title, "AI Strategist");
    }

    #[test]
    fn reaching_the_last_level_offers_mastery_topics() {
        assert_eq!(
            next_steps(LevelNumber::LAST),
            NextSteps::Mastered(&MASTERY_TOPICS)
        );
    }
}
