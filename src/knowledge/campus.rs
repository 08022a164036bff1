//! Chaitanya Bharathi Institute of Technology (CBIT, Proddatur) profile:
//! facts, aliases, triggers, and the topics deflected to official channels.

use super::alias::AliasTable;
use super::base::KnowledgeBase;
use super::entry::KnowledgeValue;
use super::error::KnowledgeError;

/// Reply for restricted topics. Identical whichever restricted word matched.
pub const RESTRICTED_NOTICE: &str = "I currently don’t have that data. Please check the official website: https://cbit.edu.in or contact: +91-9640808099";

/// Words answered only through the official website or phone line.
pub const RESTRICTED_WORDS: &[&str] = &[
    "fee",
    "fees",
    "placement",
    "placements",
    "faculty",
    "facilities",
    "hostel",
    "bus",
    "transport",
];

/// Trigger → entry key, scanned in this order.
const ROUTES: &[(&str, &str)] = &[
    ("about", "about"),
    ("information", "about"),
    ("cbit", "about"),
    ("where", "about"),
    ("vision", "vision"),
    ("mission", "mission"),
    ("founder", "founder"),
    ("chairman", "chairman"),
    ("principal", "principal"),
    ("ceo", "ceo"),
    ("director", "directors"),
    ("courses", "courses"),
    ("programs", "courses"),
    ("contact", "contact"),
    ("address", "contact"),
    ("website", "contact"),
];

/// Informal names rewritten before matching.
pub fn aliases() -> AliasTable {
    AliasTable::new([
        ("cbit", "chaitanya bharathi institute of technology"),
        ("chaitanya bharathi", "chaitanya bharathi institute of technology"),
    ])
}

pub fn knowledge_base() -> Result<KnowledgeBase, KnowledgeError> {
    let entries = vec![
        (
            "college_name",
            KnowledgeValue::text("Chaitanya Bharathi Institute of Technology (CBIT)"),
        ),
        (
            "about",
            KnowledgeValue::text(
                "Chaitanya Bharathi Institute Of Technology was established at Proddatur in YSR Kadapa District, Andhra Pradesh. It aims to provide quality education and research.",
            ),
        ),
        (
            "vision",
            KnowledgeValue::text(
                "To contribute through brilliance in education and research, producing competent and ethically strong professionals.",
            ),
        ),
        (
            "mission",
            KnowledgeValue::text(
                "• Imparting quality education\n• Fostering an empowered workforce\n• Promoting entrepreneurial skills",
            ),
        ),
        ("founder", KnowledgeValue::text("Sri. V. Jayachandra Reddy")),
        ("chairman", KnowledgeValue::text("V. Jaya Chandra Reddy")),
        ("principal", KnowledgeValue::text("Dr. S. SRUTHI, M.E, Ph.D")),
        ("ceo", KnowledgeValue::text("V. Lohit Reddy")),
        (
            "directors",
            KnowledgeValue::sections([
                ("academics", KnowledgeValue::text("Prof. G.K.D. Prasanna Venkatesan")),
                ("admin", KnowledgeValue::text("Dr. G. Sreenivasulu Reddy")),
            ]),
        ),
        (
            "affiliations",
            KnowledgeValue::text(
                "Approved by AICTE, Affiliated to JNTUA, Recognized by UGC, Accredited by NBA & NAAC (Grade A)",
            ),
        ),
        (
            "courses",
            KnowledgeValue::sections([
                (
                    "ug",
                    KnowledgeValue::list([
                        "CSE (360)",
                        "CSE (AI) (180)",
                        "CSE (AI & ML) (60)",
                        "ECE (180)",
                        "EEE (60)",
                        "MECH (30)",
                        "CIVIL (30)",
                        "CSE (DS)",
                    ]),
                ),
                ("pg", KnowledgeValue::list(["MBA (60)"])),
                (
                    "diploma",
                    KnowledgeValue::list(["DCME (120)", "DECE (120)", "DEEE (60)", "DCE (60)"]),
                ),
            ]),
        ),
        (
            "contact",
            KnowledgeValue::text(
                "Chaitanya Bharathi Institute Of Technology, Vidya Nagar, Proddatur, YSR Kadapa (Dist.), AP 516360. Mail: info@cbit.edu.in | Phone: +91-9640808099",
            ),
        ),
    ];

    KnowledgeBase::new(entries, ROUTES.iter().copied())
}
