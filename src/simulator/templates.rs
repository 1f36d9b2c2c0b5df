//! Template banks for the deterministic simulator.
//!
//! Every template uses `{keyword}` as its only placeholder. Leads are cycled
//! in order; the angle appended to a lead changes once per full pass over the
//! leads, so a lead never reappears with the same angle.

pub const KEYWORD_PLACEHOLDER: &str = "{keyword}";

pub const PARAGRAPH_LEADS: [&str; 15] = [
    "Understanding {keyword} is a practical starting point for anyone who wants steadier digestion and more energy through the day. The topic touches nutrition, daily routines, and the medical questions that tend to surface once symptoms become hard to ignore.",
    "Researchers and clinicians have looked closely at how {keyword} relates to digestive function over the past two decades. Their findings keep pointing toward evidence-based habits and plans that are tailored to the individual rather than one-size-fits-all rules.",
    "People run into {keyword} in very different ways depending on genetics, stress levels, sleep, and what ends up on their plate. Noticing your own pattern early makes it far easier to respond before small annoyances turn into persistent problems.",
    "When patients ask about {keyword}, healthcare providers usually suggest combining several measured steps. Food changes, stress management, targeted supplements, and regular check-ins tend to work better together than any single fix on its own.",
    "The biology behind {keyword} involves the digestive tract, the immune system, and trillions of resident microbes all talking to one another. Those connections explain why a whole-body view of health keeps gaining ground in clinical practice.",
    "What you eat shapes how your body handles {keyword} more than most people expect. Fiber, fermented foods, steady hydration, and regular meal timing all nudge digestion toward comfort and away from flare-ups.",
    "A registered dietitian or gastroenterologist can turn general advice about {keyword} into a plan that fits your life. Professional input is especially useful when symptoms overlap with other conditions or medications.",
    "Nutrition science has moved quickly, and newer studies on {keyword} refine much of what older guidance suggested. Some traditional approaches hold up well under scrutiny, while others are giving way to more precise strategies.",
    "Sleep quality, movement, and stress all influence {keyword} in ways that are easy to overlook. Improving even one of these foundations often makes every dietary change you try afterwards more effective.",
    "The gut microbiome sits at the center of current thinking about {keyword}. Feeding beneficial bacteria with varied plant foods is now treated as a core habit rather than an optional extra.",
    "Supplements can support a plan for {keyword} when they are chosen carefully and backed by evidence. They work best as a complement to food and lifestyle changes, never as a replacement for them.",
    "Keeping a simple food and symptom journal is one of the most useful tools for managing {keyword}. A few weeks of notes often reveal triggers and timing patterns that are invisible day to day.",
    "The gut-brain axis links mood and digestion closely, which is why {keyword} can feel worse during stressful periods. Calming practices such as breathing exercises or short walks can ease both sides of that loop.",
    "Lasting progress with {keyword} usually comes from small changes repeated consistently. Swapping one meal, adding one daily walk, or moving bedtime earlier tends to stick better than an overnight overhaul.",
    "Reliable information and a supportive community make a real difference when you are working through {keyword}. Hearing how others adapted their routines can spark ideas and keep motivation steady.",
];

pub const PARAGRAPH_ANGLES: [&str; 8] = [
    "Start by writing down one change you can make this week and review how you feel after seven days.",
    "Bring these observations to your next appointment so your clinician can see the full picture.",
    "Small, measurable goals keep the process realistic and make setbacks easier to recover from.",
    "If symptoms change suddenly or include pain, bleeding, or weight loss, seek medical care promptly.",
    "Revisit the plan every few months, because needs shift with age, season, and daily workload.",
    "Pairing this step with good hydration often makes the benefits easier to notice.",
    "Sharing the plan with family or housemates makes shopping and cooking much simpler to coordinate.",
    "Trusted sources such as the NIH, CDC, and NHS publish plain-language guidance worth bookmarking.",
];

/// A question plus the two keyword-parameterized sentences of its answer.
pub struct FaqTemplate {
    pub question: &'static str,
    pub topic: &'static str,
    pub detail: &'static str,
}

pub const FAQ_TEMPLATES: [FaqTemplate; 5] = [
    FaqTemplate {
        question: "What is {keyword}?",
        topic: "{keyword} describes an important part of digestive health that affects many people around the world.",
        detail: "Managing {keyword} brings together nutrition, daily habits, and the biological processes that keep the gut working smoothly.",
    },
    FaqTemplate {
        question: "How does {keyword} affect digestion?",
        topic: "The effect of {keyword} on digestion can reach further than most people expect.",
        detail: "Changes linked to {keyword} can influence nutrient absorption, bowel regularity, and overall comfort after meals.",
    },
    FaqTemplate {
        question: "What foods support healthy {keyword}?",
        topic: "Several food groups are recognized for supporting {keyword}.",
        detail: "For {keyword}, fiber-rich vegetables, fermented foods, healthy fats, and lean proteins are good places to start.",
    },
    FaqTemplate {
        question: "When should I see a healthcare provider about {keyword}?",
        topic: "A professional evaluation is worthwhile when {keyword} starts to affect your daily quality of life.",
        detail: "A clinician can assess symptoms related to {keyword}, rule out other causes, and recommend evidence-based next steps.",
    },
    FaqTemplate {
        question: "Are there supplements that support {keyword}?",
        topic: "Researchers have studied a number of supplements for their potential to support {keyword}.",
        detail: "Probiotics, prebiotics, digestive enzymes, and certain plant compounds show the most promise for {keyword}.",
    },
];

pub const FAQ_CLOSING: &str = "Understanding your individual needs and consulting a qualified healthcare professional helps you choose the most appropriate approach for your situation.";

pub const META_DESCRIPTION: &str =
    "{keyword} - Learn diet, symptoms, FAQs and clinical guidance for a healthy gut.";

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const SCHEMA_AUTHOR: &str = "Healthy Gut AI";

/// Substitute the keyword into a template. Whitespace runs inside the
/// keyword collapse to single spaces, so a keyword never adds line breaks.
pub fn fill(template: &str, keyword: &str) -> String {
    template.replace(KEYWORD_PLACEHOLDER, &collapse_whitespace(keyword))
}

/// Join whitespace-separated words with single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
