// Built-in clinical lookup tables
//
// Order matters everywhere below: lookups are first-match, so more specific
// keywords are listed before the generic ones they would otherwise lose to.
use crate::department::Department::{
    self, Cardiology, Emergency, Gastroenterology, Neurology, Pulmonology,
};

pub(super) const CRITICAL_SYMPTOMS: &[&str] = &[
    // cardiac
    "heart attack",
    "chest pain",
    "cardiac arrest",
    "severe chest pressure",
    "left arm pain",
    "jaw pain",
    "profuse sweating",
    "heart",
    // neurological
    "stroke",
    "face drooping",
    "arm weakness",
    "slurred speech",
    "sudden numbness",
    "inability to move",
    "vision loss",
    "thunderclap headache",
    "unconscious",
    "fainting",
    "seizure",
    "paralysis",
    "confusion",
    // trauma
    "accident",
    "severe bleeding",
    "trauma",
    "fracture",
    "head injury",
    "deep cut",
    "burn",
    "gunshot",
    "stab wound",
    "road accident",
    "broken bone",
    "crushed",
    "amputation",
    "crash",
    // respiratory
    "difficulty breathing",
    "shortness of breath",
    "choking",
    "severe asthma",
    "not breathing",
    "blue lips",
    // other emergencies
    "severe pain",
    "poisoning",
    "anaphylaxis",
    "severe allergic reaction",
    "vomiting blood",
    "labor pain",
    "suicide attempt",
];

pub(super) const DEPARTMENT_KEYWORDS: &[(&str, Department)] = &[
    ("heart", Cardiology),
    ("chest", Cardiology),
    ("cardiac", Cardiology),
    ("sweating", Cardiology),
    ("jaw", Cardiology),
    ("left arm", Cardiology),
    ("stroke", Neurology),
    ("face", Neurology),
    ("arm", Neurology),
    ("speech", Neurology),
    ("numb", Neurology),
    ("inability to move", Neurology),
    ("paralysis", Neurology),
    ("seizure", Neurology),
    ("unconscious", Neurology),
    ("headache", Neurology),
    ("faint", Neurology),
    ("vision", Neurology),
    ("confusion", Neurology),
    ("accident", Emergency),
    ("bleed", Emergency),
    ("trauma", Emergency),
    ("fracture", Emergency),
    ("burn", Emergency),
    ("injury", Emergency),
    ("cut", Emergency),
    ("wound", Emergency),
    ("broken", Emergency),
    ("crash", Emergency),
    ("gunshot", Emergency),
    ("amputation", Emergency),
    ("breath", Pulmonology),
    ("chok", Pulmonology),
    ("asthma", Pulmonology),
    ("blue lips", Pulmonology),
    ("vomit", Gastroenterology),
    ("poison", Emergency),
    ("stomach", Gastroenterology),
    ("abdominal", Gastroenterology),
];

pub(super) const DISEASE_TABLE: &[(Department, &[(&str, &str)])] = &[
    (
        Neurology,
        &[
            ("paralysis", "Stroke / Paralysis"),
            ("inability to move", "Stroke / Paralysis"),
            ("speech", "Stroke"),
            ("numb", "Transient Ischemic Attack"),
            ("headache", "Severe Migraine"),
            ("seizure", "Epilepsy"),
            ("unconscious", "Loss of Consciousness"),
        ],
    ),
    (
        Cardiology,
        &[
            ("chest", "Myocardial Infarction"),
            ("heart", "Cardiac Arrest"),
            ("arm", "Angina"),
            ("faint", "Cardiac Syncope"),
            ("sweating", "Acute Coronary Syndrome"),
        ],
    ),
    (
        Emergency,
        &[
            ("accident", "Trauma"),
            ("bleed", "Hemorrhage"),
            ("burn", "Severe Burns"),
            ("fracture", "Bone Fracture"),
            ("gunshot", "Gunshot Wound"),
        ],
    ),
    (
        Pulmonology,
        &[("breath", "Respiratory Failure"), ("chok", "Obstruction")],
    ),
    (
        Gastroenterology,
        &[("vomit", "GI Bleeding"), ("pain", "Appendicitis/Acute Abdomen")],
    ),
];
