use serde::{Deserialize, Serialize};

/// One question the assistant can answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub keywords: Vec<String>,
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl FaqEntry {
    pub fn new(keywords: &[&str], question: &str, answer: &str, category: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            question: question.to_string(),
            answer: answer.to_string(),
            category: category.to_string(),
        }
    }
}

/// The site's built-in FAQ table, in match priority order.
pub fn builtin_faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            &["custody", "child custody", "visitation", "parenting time"],
            "What are fathers' rights regarding child custody?",
            "Fathers have equal legal rights to seek custody of their children. However, statistics show that mothers receive primary custody in about 83% of cases. Fathers can petition for joint custody, sole custody, or increased visitation rights. The court's decision should be based on the best interests of the child, not gender stereotypes.",
            "custody",
        ),
        FaqEntry::new(
            &["discrimination", "bias", "unfair treatment", "gender bias"],
            "Do fathers face discrimination in family court?",
            "Unfortunately, yes. Many fathers report experiencing gender bias in family court proceedings. Courts sometimes operate under outdated assumptions that mothers are naturally better caregivers. This systemic bias is what our movement aims to change through legal reform and awareness.",
            "discrimination",
        ),
        FaqEntry::new(
            &["support", "child support", "financial", "money", "payments"],
            "What about child support obligations?",
            "Fathers are typically required to pay child support even with limited custody time. The amount is usually calculated based on income and custody arrangement. However, fathers should also have the right to equal parenting time, which can affect support calculations. Consult with a family law attorney for specific guidance.",
            "support",
        ),
        FaqEntry::new(
            &["rights", "legal rights", "parental rights", "father rights"],
            "What legal rights do fathers have?",
            "Fathers have the right to: seek custody or visitation, make decisions about their child's education and healthcare (if granted legal custody), receive information about their child's welfare, and petition the court for custody modifications. These rights should be equal to mothers' rights.",
            "rights",
        ),
        FaqEntry::new(
            &["help", "assistance", "support groups", "resources"],
            "Where can fathers get help and support?",
            "Fathers can find support through: local fathers' rights organizations, family law attorneys specializing in fathers' rights, support groups (both online and in-person), counseling services, and advocacy organizations like ours. Don't face these challenges alone - help is available.",
            "help",
        ),
        FaqEntry::new(
            &["statistics", "facts", "numbers", "data"],
            "What are the statistics on fathers' rights?",
            "Key statistics: 24+ million single fathers in the US, 83% of custody cases favor mothers, only 17% of fathers receive primary custody, and children with involved fathers show 40% better outcomes in academics and emotional development. These numbers highlight the need for reform.",
            "statistics",
        ),
        FaqEntry::new(
            &["petition", "sign", "support", "movement"],
            "How can I support the fathers' rights movement?",
            "You can help by: signing our petition for legal reform, sharing your story, contacting your representatives, joining local support groups, spreading awareness on social media, and donating to fathers' rights organizations. Every voice matters in creating change.",
            "support",
        ),
        FaqEntry::new(
            &["lawyer", "attorney", "legal help", "representation"],
            "Do I need a lawyer for custody issues?",
            "While not legally required, having an experienced family law attorney is highly recommended, especially one who understands fathers' rights issues. They can help navigate the legal system, protect your rights, and present your case effectively. Many offer free consultations.",
            "legal",
        ),
        FaqEntry::new(
            &["children", "kids", "impact", "effects"],
            "How does father absence affect children?",
            "Research shows children benefit significantly from having both parents involved. Father absence can lead to increased behavioral problems, lower academic performance, and emotional difficulties. This is why equal parenting rights are so important - it's about what's best for children.",
            "children",
        ),
        FaqEntry::new(
            &["court", "judge", "hearing", "trial"],
            "What should I expect in family court?",
            "Family court proceedings can be emotionally challenging. Be prepared with documentation, dress professionally, remain calm and respectful, focus on your child's best interests, and follow your attorney's advice. Courts should consider factors like parenting ability, stability, and the child's relationship with each parent.",
            "court",
        ),
    ]
}

/// Replies used when no FAQ entry matches.
pub const DEFAULT_RESPONSES: [&str; 3] = [
    "That's a great question about fathers' rights. While I don't have a specific answer for that, I'd recommend contacting a family law attorney or reaching out to our support team for personalized guidance.",
    "I understand you're looking for information about fathers' rights. For questions I can't answer, please consider signing our petition or contacting local fathers' rights organizations for more detailed assistance.",
    "Thank you for your question. While I may not have that specific information, you can find more resources by exploring our website or connecting with fathers' rights support groups in your area.",
];

pub const WELCOME_MESSAGE: &str = "Hello! I'm here to help answer your questions about fathers' rights. You can ask me about custody, legal rights, support resources, or how to get involved in our movement. What would you like to know?";

pub const QUICK_QUESTIONS: [&str; 4] = [
    "What are fathers' custody rights?",
    "How can I get help with my case?",
    "What statistics support fathers' rights?",
    "How can I support this movement?",
];
