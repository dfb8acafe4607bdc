//! Built-in template playbooks.
//!
//! Templates exist only in code: they are listed alongside persisted
//! records but are never stored, edited, or deleted. Identification is
//! exact id membership in the fixed list, so user records must not reuse
//! these ids.

use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::action::EscalationAction;
use crate::entities::{EscalationPath, Playbook, Resource, Timestamp};

static TEMPLATES: Lazy<Vec<Playbook>> = Lazy::new(|| {
    vec![
        default_validation_template(),
        content_moderation_workflow(),
        code_review_workflow(),
        design_review_workflow(),
        communications_workflow(),
    ]
});

/// All built-in templates, in display order.
pub fn builtin_templates() -> &'static [Playbook] {
    &TEMPLATES
}

/// Exact id membership in the fixed template list.
pub fn is_builtin_template(id: &str) -> bool {
    TEMPLATES.iter().any(|template| template.id == id)
}

fn shipped_at(year: i32, month: u32, day: u32) -> Timestamp {
    // Template dates are fixed, known-valid calendar days.
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn path(
    id: &str,
    name: &str,
    description: &str,
    action: EscalationAction,
    conditions: &[&str],
) -> EscalationPath {
    EscalationPath {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        action,
        conditions: conditions.iter().map(|c| c.to_string()).collect(),
    }
}

fn resource(title: &str, description: &str, url: &str) -> Resource {
    Resource {
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
    }
}

fn default_validation_template() -> Playbook {
    Playbook {
        id: "default".to_string(),
        title: "Default AI Validation Playbook".to_string(),
        description: "An example framework for validating AI-generated content across \
            different use cases. This template outlines a structured way to decide when AI \
            content may need human review, expert input, or when it might be best to avoid \
            using it."
            .to_string(),
        created_at: shipped_at(2025, 9, 26),
        updated_at: shipped_at(2025, 9, 26),
        category: Some("Built-in Template".to_string()),
        escalation_paths: vec![
            path(
                "1",
                "Internal Verification",
                "Content should be verified by internal team members before publication or \
                 use. This path ensures that AI-generated content aligns with organizational \
                 standards, brand voice, and factual accuracy.",
                EscalationAction::Verify,
                &[
                    "Sensitive business information or proprietary data",
                    "Legal or compliance implications",
                    "Customer-facing communications",
                    "Financial data or projections",
                    "Product specifications or technical documentation",
                    "Marketing materials representing the brand",
                    "Internal policies or procedures",
                    "Performance metrics or analytics reports",
                ],
            ),
            path(
                "2",
                "External Expert Review",
                "Content should be reviewed by subject matter experts or external \
                 consultants. This path is critical for specialized domains where accuracy \
                 and expertise are paramount.",
                EscalationAction::Consult,
                &[
                    "Technical or specialized domain knowledge required",
                    "High-impact business decisions",
                    "Novel or complex subject matter",
                    "Industry-specific regulations or standards",
                    "Scientific or research-based content",
                    "Strategic planning or forecasting",
                    "Cross-functional initiatives requiring multiple perspectives",
                    "Content that could impact stakeholder relationships",
                ],
            ),
            path(
                "3",
                "Avoid AI Content",
                "Do not use AI-generated content in these scenarios. Human judgment, \
                 expertise, and accountability are essential for these sensitive situations.",
                EscalationAction::Avoid,
                &[
                    "Highly sensitive personal information (PII, health records)",
                    "Legal advice or binding legal documents",
                    "Medical diagnosis or treatment recommendations",
                    "Content requiring human empathy and emotional intelligence",
                    "Situations where accuracy is absolutely critical",
                    "Crisis communications or emergency responses",
                    "Ethical decision-making or moral judgments",
                    "Personnel decisions (hiring, firing, promotions)",
                    "Content that could cause harm if incorrect",
                ],
            ),
        ],
        resources: Some(vec![
            resource(
                "Systematic Literature Review of Validation Methods for AI Systems",
                "Surveys many real-world methods (trials, simulation, expert review) for \
                 validating AI systems. Helps you see what others do and what is commonly \
                 missing.",
                "https://arxiv.org/abs/2104.01562",
            ),
            resource(
                "Human-in-the-Loop Architectures for Validating GenAI Outputs in Clinical \
                 Settings",
                "Deep dive into how human oversight can be built into workflows when the \
                 outputs have high stakes (in clinical settings). Useful ideas for checking \
                 model confidence, explainability, review checkpoints.",
                "https://eajournals.org/ijhsse/vol12-issue-3-2024/human-in-the-loop-architectures-for-validating-genai-outputs-in-clinical-settings/",
            ),
            resource(
                "Improving the Efficiency of Human-in-the-Loop Systems: Adding Artificial \
                 to Human Experts",
                "Examines ways to reduce human burden by using \"artificial experts\" that \
                 learn from human corrections - good for scaling HITL workflows.",
                "https://arxiv.org/abs/2106.05976",
            ),
            resource(
                "Validation of Artificial Intelligence Containing Products Across the \
                 Regulated Healthcare Industries",
                "Focuses on methodologies for validation in regulated domains; good for \
                 compliance, safety, governance.",
                "https://pubmed.ncbi.nlm.nih.gov/38234351/",
            ),
            resource(
                "Human-in-the-Loop AI in Document Workflows - Best Practices & Common \
                 Pitfalls",
                "Practical guide for setting up document review / content workflows where \
                 humans review or correct AI output. Includes metrics, scaling, audit \
                 trail, etc.",
                "https://parseur.com/blog/human-in-the-loop-ai-in-document-workflows-best-practices-common-pitfalls",
            ),
        ]),
        contributor: None,
    }
}

fn content_moderation_workflow() -> Playbook {
    Playbook {
        id: "content-moderation".to_string(),
        title: "Content Moderation Workflow".to_string(),
        description: "A specialized workflow for moderating user-generated content with AI \
            assistance. This playbook helps teams efficiently review and manage community \
            content while maintaining safety and quality standards."
            .to_string(),
        created_at: shipped_at(2025, 9, 25),
        updated_at: shipped_at(2025, 9, 25),
        category: Some("Built-in Template".to_string()),
        escalation_paths: vec![
            path(
                "1",
                "Automated Approval",
                "Content that passes all automated checks and can be approved without human \
                 review. This path handles low-risk, clearly acceptable content.",
                EscalationAction::Verify,
                &[
                    "Content flagged as safe by AI moderation tools",
                    "User has good standing history",
                    "Content type is low-risk (e.g., general discussion)",
                    "No sensitive topics or keywords detected",
                    "Complies with community guidelines automatically",
                    "Similar to previously approved content",
                ],
            ),
            path(
                "2",
                "Human Moderator Review",
                "Content that requires human moderator review due to potential policy \
                 violations or ambiguous context. Moderators make final decisions on \
                 approval, editing, or removal.",
                EscalationAction::Consult,
                &[
                    "AI confidence score is below threshold",
                    "Content contains borderline language or imagery",
                    "User has previous warnings or violations",
                    "Content involves sensitive topics (politics, religion, health)",
                    "Multiple users have reported the content",
                    "Content is in a gray area of community guidelines",
                    "New content type or format not well-trained in AI models",
                    "Context requires cultural or situational understanding",
                ],
            ),
            path(
                "3",
                "Immediate Removal & Escalation",
                "Content that violates clear policies and should be immediately removed. \
                 These cases may require further action such as user suspension or legal \
                 review.",
                EscalationAction::Avoid,
                &[
                    "Explicit violence, gore, or graphic content",
                    "Hate speech or targeted harassment",
                    "Sexual content involving minors",
                    "Illegal activities or content",
                    "Doxxing or sharing private information",
                    "Credible threats of harm",
                    "Spam or malicious links",
                    "Copyright infringement or intellectual property violations",
                    "Coordinated inauthentic behavior",
                ],
            ),
            path(
                "4",
                "Appeal Review Process",
                "Content that users have appealed after initial moderation decisions. \
                 Requires senior moderator or policy team review.",
                EscalationAction::Consult,
                &[
                    "User has submitted an appeal",
                    "Original decision was made by automated system",
                    "Content has high engagement or visibility",
                    "Decision involves interpretation of new or updated policies",
                    "Multiple moderators have disagreed on the decision",
                    "Content creator is a verified or high-profile user",
                ],
            ),
        ],
        resources: None,
        contributor: None,
    }
}

fn code_review_workflow() -> Playbook {
    Playbook {
        id: "code-review".to_string(),
        title: "AI-Assisted Code Review Workflow".to_string(),
        description: "An example workflow for reviewing AI-generated code in software \
            development. Helps teams decide when AI code suggestions need human review, \
            testing, or should be avoided."
            .to_string(),
        created_at: shipped_at(2025, 10, 1),
        updated_at: shipped_at(2025, 10, 1),
        category: Some("Built-in Template".to_string()),
        escalation_paths: vec![
            path(
                "1",
                "Auto-Merge with Tests",
                "Low-risk code changes that can be merged after automated testing passes. \
                 Suitable for routine refactoring and simple updates.",
                EscalationAction::Approve,
                &[
                    "Code formatting or style improvements",
                    "Documentation updates or comments",
                    "Simple bug fixes with clear test coverage",
                    "Dependency version updates (minor/patch)",
                    "Refactoring with no logic changes",
                    "Adding logging or debugging statements",
                ],
            ),
            path(
                "2",
                "Peer Code Review",
                "Code that requires human developer review before merging. Standard review \
                 process with at least one approval needed.",
                EscalationAction::Review,
                &[
                    "New feature implementation",
                    "Business logic changes",
                    "Database schema modifications",
                    "API endpoint changes",
                    "Performance optimizations",
                    "Code affecting multiple modules",
                    "Changes to authentication or authorization",
                    "Third-party integrations",
                ],
            ),
            path(
                "3",
                "Senior/Architect Review",
                "Critical code that requires review by senior developers or architects. May \
                 need design discussion before implementation.",
                EscalationAction::Escalate,
                &[
                    "Security-sensitive code (encryption, authentication)",
                    "Core infrastructure or framework changes",
                    "Major architectural decisions",
                    "Changes affecting system scalability",
                    "Database migration scripts",
                    "Payment processing or financial transactions",
                    "Data privacy or compliance-related code",
                    "Breaking API changes",
                ],
            ),
            path(
                "4",
                "Manual Implementation Required",
                "Scenarios where AI-generated code should not be used. Requires human \
                 expertise and careful implementation.",
                EscalationAction::Avoid,
                &[
                    "Cryptographic implementations",
                    "Security vulnerability fixes",
                    "Regulatory compliance code (HIPAA, GDPR, SOC2)",
                    "Production incident hotfixes",
                    "Code involving personal health information",
                    "Financial calculations or billing logic",
                    "Access control or permission systems",
                    "Code that could cause data loss",
                ],
            ),
        ],
        resources: None,
        contributor: None,
    }
}

fn design_review_workflow() -> Playbook {
    Playbook {
        id: "design-review".to_string(),
        title: "AI-Generated Design Review Workflow".to_string(),
        description: "An example framework for reviewing AI-generated designs, mockups, and \
            visual assets. Helps design teams maintain quality and brand consistency."
            .to_string(),
        created_at: shipped_at(2025, 10, 1),
        updated_at: shipped_at(2025, 10, 1),
        category: Some("Built-in Template".to_string()),
        escalation_paths: vec![
            path(
                "1",
                "Quick Approval",
                "Low-risk design assets that align with brand guidelines and can be \
                 approved with minimal review.",
                EscalationAction::Approve,
                &[
                    "Internal presentation slides",
                    "Social media graphics (non-promotional)",
                    "Stock image selection or curation",
                    "Basic icon or illustration variations",
                    "Template-based designs",
                    "Internal documentation visuals",
                ],
            ),
            path(
                "2",
                "Design Team Review",
                "Designs that need review by the design team to ensure quality, \
                 consistency, and alignment with brand standards.",
                EscalationAction::Review,
                &[
                    "Marketing materials or campaigns",
                    "Website or app UI components",
                    "Brand-adjacent visual content",
                    "Customer-facing graphics",
                    "Product packaging concepts",
                    "Email templates or newsletters",
                    "Infographics or data visualizations",
                ],
            ),
            path(
                "3",
                "Brand/Creative Director Approval",
                "High-impact designs requiring approval from brand or creative leadership. \
                 May need multiple iterations.",
                EscalationAction::Escalate,
                &[
                    "Logo or brand identity elements",
                    "Major campaign creative",
                    "Product launch materials",
                    "Brand guideline updates",
                    "High-visibility public communications",
                    "Partnership or co-branding materials",
                    "Trade show or event branding",
                ],
            ),
            path(
                "4",
                "Human Designer Required",
                "Design work that requires human creativity, cultural sensitivity, or \
                 cannot be delegated to AI.",
                EscalationAction::Avoid,
                &[
                    "Designs involving cultural or religious symbolism",
                    "Sensitive social or political topics",
                    "Accessibility-critical interfaces",
                    "Legal or regulatory required disclosures",
                    "Designs requiring emotional intelligence",
                    "Crisis communication visuals",
                    "Designs involving real people or testimonials",
                ],
            ),
        ],
        resources: None,
        contributor: None,
    }
}

fn communications_workflow() -> Playbook {
    Playbook {
        id: "communications".to_string(),
        title: "Communications & PR Review Workflow".to_string(),
        description: "An example workflow for validating AI-generated communications, press \
            releases, and public statements. Ensures messaging is accurate, on-brand, and \
            appropriate."
            .to_string(),
        created_at: shipped_at(2025, 10, 1),
        updated_at: shipped_at(2025, 10, 1),
        category: Some("Built-in Template".to_string()),
        escalation_paths: vec![
            path(
                "1",
                "Internal Communications",
                "Routine internal messages that can be sent with light review. Suitable for \
                 team updates and operational communications.",
                EscalationAction::Verify,
                &[
                    "Team meeting notes or summaries",
                    "Internal newsletter content",
                    "Routine status updates",
                    "Event invitations or reminders",
                    "General company announcements",
                    "Internal FAQ responses",
                ],
            ),
            path(
                "2",
                "Communications Team Review",
                "External communications requiring review by communications professionals \
                 before publication.",
                EscalationAction::Review,
                &[
                    "Blog posts or articles",
                    "Social media posts",
                    "Customer email campaigns",
                    "Product update announcements",
                    "Partner communications",
                    "Community forum responses",
                    "Media kit materials",
                ],
            ),
            path(
                "3",
                "Executive/Legal Review",
                "High-stakes communications requiring executive approval and potentially \
                 legal review before release.",
                EscalationAction::Escalate,
                &[
                    "Press releases or media statements",
                    "Crisis communications",
                    "Earnings or financial announcements",
                    "Merger or acquisition communications",
                    "Regulatory filings or responses",
                    "Executive thought leadership",
                    "Policy position statements",
                    "Responses to media inquiries",
                ],
            ),
            path(
                "4",
                "Human-Only Communications",
                "Sensitive communications that require human judgment, empathy, and cannot \
                 be AI-generated.",
                EscalationAction::Avoid,
                &[
                    "Apologies or crisis responses",
                    "Layoff or restructuring announcements",
                    "Condolences or sympathy messages",
                    "Legal disputes or litigation",
                    "Whistleblower or ethics concerns",
                    "Personal employee matters",
                    "Responses to serious incidents or accidents",
                    "Communications involving minors or vulnerable populations",
                ],
            ),
        ],
        resources: None,
        contributor: None,
    }
}
