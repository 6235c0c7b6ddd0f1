use super::super::domain::{Assessment, FieldSchema, ScoreComponent};
use super::super::evaluation::{
    band_for, ClassificationDefinition, DefinitionError, FieldValues, LookupTable, Rule,
    ScoreBand, ValidationError,
};
use super::{lookup_system, ABDOMINOPELVIC};

const ORGANS: &[&str] = &["Spleen", "Liver", "Kidney", "Pancreas"];
const INJURY_GRADES: &[&str] = &["I", "II", "III", "IV", "V"];

fn aast(values: &FieldValues<'_>) -> Result<Assessment, ValidationError> {
    let organ = values.choice("organ")?;
    let grade = values.choice("grade")?;

    let (interpretation, recommendation) = match (organ, grade) {
        ("Pancreas", "III" | "IV" | "V") => (
            "High-grade pancreatic injury with probable main duct disruption.",
            "Surgical consultation; ERCP or MRCP to confirm ductal injury.",
        ),
        (_, "I" | "II") => (
            "Low-grade injury: small hematoma or superficial laceration.",
            "Nonoperative management with clinical observation.",
        ),
        (_, "III") => (
            "Moderate injury: larger hematoma or deeper parenchymal laceration.",
            "Nonoperative management with serial examination; angiography if active extravasation.",
        ),
        _ => (
            "High-grade injury: vascular or hilar involvement, devascularization, or shattered organ.",
            "Angioembolization or operative management depending on hemodynamic stability.",
        ),
    };

    Ok(Assessment::new(
        format!("{organ} injury Grade {grade}"),
        interpretation,
        recommendation,
    ))
}

const LIRADS_FEATURES: &[&str] = &[
    "Arterial Phase Hyperenhancement",
    "Washout",
    "Capsule Appearance",
    "Lesion Size > 10mm",
];

fn lirads(values: &FieldValues<'_>) -> Result<Assessment, ValidationError> {
    let features = values.selection("features")?;
    let aphe = features.contains("Arterial Phase Hyperenhancement");
    let washout = features.contains("Washout");

    let assessment = if aphe && washout {
        Assessment::new(
            "LR-4",
            "Probably HCC: arterial phase hyperenhancement with washout.",
            "Multidisciplinary discussion; consider biopsy or short-interval imaging.",
        )
    } else if !features.is_empty() {
        Assessment::new(
            "LR-3",
            "Intermediate probability of malignancy.",
            "Repeat or alternative diagnostic imaging in 3 to 6 months.",
        )
    } else {
        Assessment::new(
            "LR-2",
            "Probably benign.",
            "Return to routine surveillance.",
        )
    };

    Ok(assessment)
}

fn balthazar_points(grade: &str) -> i32 {
    match grade {
        "A" => 0,
        "B" => 1,
        "C" => 2,
        "D" => 3,
        _ => 4,
    }
}

/// Necrosis bands: none, under 33%, 33% to under 50%, 50% and over.
fn necrosis_points(percent: f64) -> (i32, &'static str) {
    if percent >= 50.0 {
        (3, ">=50%")
    } else if percent >= 33.0 {
        (2, ">=33% but <50%")
    } else if percent > 0.0 {
        (1, "<33%")
    } else {
        (0, "none")
    }
}

const CTSI_BANDS: &[ScoreBand] = &[
    ScoreBand {
        floor: 0,
        name: "mild",
        interpretation: "Low morbidity and mortality expected.",
        recommendation: "Supportive care; imaging only if clinical deterioration.",
    },
    ScoreBand {
        floor: 4,
        name: "moderate",
        interpretation: "Increased risk of local complications.",
        recommendation: "Close clinical monitoring; follow-up contrast CT for collections.",
    },
    ScoreBand {
        floor: 7,
        name: "severe",
        interpretation: "High risk of infected necrosis and mortality.",
        recommendation: "ICU-level care; multidisciplinary management of necrotizing pancreatitis.",
    },
];

fn ctsi(values: &FieldValues<'_>) -> Result<Assessment, ValidationError> {
    let grade = values.choice("balthazar_grade")?;
    let necrosis = values.decimal("necrosis_percent")?;

    let inflammation = balthazar_points(grade);
    let (necrosis_score, necrosis_band) = necrosis_points(necrosis);
    let total = inflammation + necrosis_score;
    let band = band_for(CTSI_BANDS, total);

    let components = vec![
        ScoreComponent::new("balthazar_grade", inflammation, format!("Balthazar {grade}")),
        ScoreComponent::new(
            "necrosis_percent",
            necrosis_score,
            format!("{necrosis:.0}% necrosis ({necrosis_band})"),
        ),
    ];

    Ok(Assessment::new(
        format!("CTSI {total}"),
        format!("{} severity. {}", band.name, band.interpretation),
        band.recommendation,
    )
    .with_components(components))
}

fn pirads(values: &FieldValues<'_>) -> Result<Assessment, ValidationError> {
    let assessment = if values.contains("findings", "Restricted diffusion")? {
        Assessment::new(
            "PI-RADS 4",
            "Clinically significant cancer is likely.",
            "Targeted MRI-guided or fusion biopsy.",
        )
    } else {
        Assessment::new(
            "PI-RADS 2",
            "Clinically significant cancer is unlikely.",
            "Routine follow-up; biopsy per PSA kinetics and clinical risk.",
        )
    };
    Ok(assessment)
}

pub(super) fn definitions() -> Result<Vec<ClassificationDefinition>, DefinitionError> {
    Ok(vec![
        ClassificationDefinition::new(
            "aast",
            ABDOMINOPELVIC,
            "Trauma-Specific Organ Injury Scales (AAST/OIS)",
            "CT and operative grading of solid organ injury by hematoma size, laceration depth, and vascular injury.",
            vec![
                FieldSchema::first_of("organ", "Organ", ORGANS),
                FieldSchema::first_of("grade", "Injury grade", INJURY_GRADES),
            ],
            Rule::Computed(aast),
        )?,
        ClassificationDefinition::new(
            "li-rads",
            ABDOMINOPELVIC,
            "LI-RADS (Liver)",
            "Liver observations in patients at high risk for HCC, from major features on contrast-enhanced CT/MRI.",
            vec![FieldSchema::selection(
                "features",
                "Observed LI-RADS features",
                LIRADS_FEATURES,
            )],
            Rule::Computed(lirads),
        )?,
        lookup_system(
            "bosniak",
            ABDOMINOPELVIC,
            "Bosniak Classification (Kidney/Adrenal)",
            "Cystic renal mass category on CT or MRI.",
            "Bosniak category",
            LookupTable::new(
                "category",
                &[
                    ("I", "Bosniak I", "Simple cyst with thin smooth wall.", "Benign; no follow-up."),
                    ("II", "Bosniak II", "Minimally complex cyst: few thin septa, fine calcification, or hyperdense under 3 cm.", "Benign; no follow-up."),
                    ("IIF", "Bosniak IIF", "Minimally thickened or more numerous septa; nodular calcification.", "Imaging follow-up at 6 months, 12 months, then annually for 5 years."),
                    ("III", "Bosniak III", "Thickened irregular walls or septa with measurable enhancement.", "Surgical excision or active surveillance; roughly half are malignant."),
                    ("IV", "Bosniak IV", "Enhancing soft-tissue components.", "Surgical excision; most are malignant."),
                ],
            ),
        )?,
        lookup_system(
            "balthazar",
            ABDOMINOPELVIC,
            "Balthazar Grade (Pancreas)",
            "CT grade of acute pancreatitis by pancreatic and peripancreatic inflammation.",
            "Balthazar grade",
            LookupTable::new(
                "grade",
                &[
                    ("A", "Balthazar A", "Normal pancreas.", "Supportive care."),
                    ("B", "Balthazar B", "Focal or diffuse pancreatic enlargement.", "Supportive care."),
                    ("C", "Balthazar C", "Pancreatic abnormality with peripancreatic inflammation.", "Supportive care; monitor for progression."),
                    ("D", "Balthazar D", "Single peripancreatic fluid collection.", "Monitor for complications; follow-up CT if deterioration."),
                    ("E", "Balthazar E", "Two or more fluid collections or retroperitoneal gas.", "High risk of infected necrosis; close monitoring and interval CT."),
                ],
            ),
        )?,
        ClassificationDefinition::new(
            "ctsi",
            ABDOMINOPELVIC,
            "CT Severity Index (Pancreatitis)",
            "Balthazar inflammation points plus pancreatic necrosis points.",
            vec![
                FieldSchema::first_of("balthazar_grade", "Balthazar grade", &["A", "B", "C", "D", "E"]),
                FieldSchema::decimal("necrosis_percent", "Pancreatic necrosis (%)", 0.0, 100.0, 0.0),
            ],
            Rule::Computed(ctsi),
        )?,
        ClassificationDefinition::new(
            "pi-rads",
            ABDOMINOPELVIC,
            "PI-RADS (Prostate)",
            "Prostate lesion score from multiparametric MRI features.",
            vec![FieldSchema::selection(
                "findings",
                "Prostate findings",
                &["Low signal intensity on T2", "Restricted diffusion", "Early enhancement"],
            )],
            Rule::Computed(pirads),
        )?,
        lookup_system(
            "o-rads",
            ABDOMINOPELVIC,
            "O-RADS (Ovarian/Adnexal)",
            "Ovarian-adnexal risk category based on imaging morphology.",
            "O-RADS category",
            LookupTable::new(
                "category",
                &[
                    ("0", "O-RADS 0", "Incomplete evaluation.", "Repeat study or alternative imaging."),
                    ("1", "O-RADS 1", "Normal ovary, physiologic findings.", "No further management."),
                    ("2", "O-RADS 2", "Almost certainly benign (under 1% risk).", "Follow-up according to lesion type and menopausal status."),
                    ("3", "O-RADS 3", "Low risk of malignancy (1% to under 10%).", "Ultrasound follow-up or MRI; gynecology referral."),
                    ("4", "O-RADS 4", "Intermediate risk (10% to under 50%).", "MRI with O-RADS MRI score; gynecologic oncology consultation."),
                    ("5", "O-RADS 5", "High risk (50% or more).", "Gynecologic oncology referral."),
                ],
            ),
        )?,
        lookup_system(
            "ti-rads",
            ABDOMINOPELVIC,
            "TI-RADS (Thyroid)",
            "Thyroid nodule category on ultrasound.",
            "TI-RADS category",
            LookupTable::new(
                "category",
                &[
                    ("TR1", "TR1", "Benign.", "No fine-needle aspiration."),
                    ("TR2", "TR2", "Not suspicious.", "No fine-needle aspiration."),
                    ("TR3", "TR3", "Mildly suspicious.", "FNA if 2.5 cm or more; follow-up if 1.5 cm or more."),
                    ("TR4", "TR4", "Moderately suspicious.", "FNA if 1.5 cm or more; follow-up if 1 cm or more."),
                    ("TR5", "TR5", "Highly suspicious.", "FNA if 1 cm or more; follow-up if 0.5 cm or more."),
                ],
            ),
        )?,
        lookup_system(
            "figo",
            ABDOMINOPELVIC,
            "FIGO Staging (Uterus & Cervix)",
            "Gynecologic cancer stage, with MRI defining local extent.",
            "FIGO stage",
            LookupTable::new(
                "stage",
                &[
                    ("I", "FIGO Stage I", "Tumor confined to the organ of origin.", "Surgical management is typical."),
                    ("II", "FIGO Stage II", "Extension beyond the organ without pelvic sidewall involvement.", "Surgery or chemoradiation depending on primary site."),
                    ("III", "FIGO Stage III", "Pelvic sidewall, lower vaginal, or regional nodal involvement.", "Chemoradiation; multidisciplinary planning."),
                    ("IV", "FIGO Stage IV", "Bladder or rectal mucosa invasion or distant metastasis.", "Systemic therapy with palliative local treatment as needed."),
                ],
            ),
        )?,
    ])
}
