use super::super::domain::{Assessment, FieldSchema, ScoreComponent};
use super::super::evaluation::{
    band_for, ClassificationDefinition, DefinitionError, FieldValues, LookupTable, Rule,
    ScoreBand, ValidationError,
};
use super::{lookup_system, CARDIOTHORACIC};

const QANADLI_MAX: i32 = 40;

const QANADLI_BANDS: &[ScoreBand] = &[
    ScoreBand {
        floor: 0,
        name: "none",
        interpretation: "No segmental arterial obstruction.",
        recommendation: "No embolic burden; consider alternative diagnoses.",
    },
    ScoreBand {
        floor: 1,
        name: "mild",
        interpretation: "Limited clot burden.",
        recommendation: "Anticoagulation per risk stratification.",
    },
    ScoreBand {
        floor: 11,
        name: "moderate",
        interpretation: "Intermediate clot burden.",
        recommendation: "Anticoagulation; assess right ventricular strain on CT and echocardiography.",
    },
    ScoreBand {
        floor: 21,
        name: "severe",
        interpretation: "Extensive clot burden, associated with right ventricular dysfunction.",
        recommendation: "Urgent risk stratification; consider reperfusion therapy if hemodynamically unstable.",
    },
];

/// 1 point per partially and 2 per completely occluded segmental artery,
/// capped at 40 (20 segmental arteries).
fn qanadli(values: &FieldValues<'_>) -> Result<Assessment, ValidationError> {
    let partial = values.integer("partial_occlusions")? as i32;
    let complete = values.integer("complete_occlusions")? as i32;

    let mut components = vec![
        ScoreComponent::new(
            "partial_occlusions",
            partial,
            format!("{partial} partially occluded x 1"),
        ),
        ScoreComponent::new(
            "complete_occlusions",
            complete * 2,
            format!("{complete} completely occluded x 2"),
        ),
    ];

    let raw = partial + complete * 2;
    let score = raw.min(QANADLI_MAX);
    if raw > score {
        components.push(ScoreComponent::new(
            "segment_limit",
            score - raw,
            format!("capped at {QANADLI_MAX}"),
        ));
    }

    let band = band_for(QANADLI_BANDS, score);
    let obstruction_index = f64::from(score) / f64::from(QANADLI_MAX) * 100.0;

    Ok(Assessment::new(
        format!("{score}/{QANADLI_MAX}"),
        format!(
            "{} clot burden (obstruction index {:.1}%). {}",
            band.name, obstruction_index, band.interpretation
        ),
        band.recommendation,
    )
    .with_components(components))
}

const PROTEIN_RATIO_CUTOFF: f64 = 0.5;
const LDH_RATIO_CUTOFF: f64 = 0.6;

/// Exudate when either ratio reaches its cutoff.
fn lights_criteria(values: &FieldValues<'_>) -> Result<Assessment, ValidationError> {
    let protein_ratio = values.decimal("protein_ratio")?;
    let ldh_ratio = values.decimal("ldh_ratio")?;

    let protein_met = protein_ratio >= PROTEIN_RATIO_CUTOFF;
    let ldh_met = ldh_ratio >= LDH_RATIO_CUTOFF;

    let components = vec![
        ScoreComponent::new(
            "protein_ratio",
            i32::from(protein_met),
            format!("protein ratio {protein_ratio:.2} vs cutoff {PROTEIN_RATIO_CUTOFF}"),
        ),
        ScoreComponent::new(
            "ldh_ratio",
            i32::from(ldh_met),
            format!("LDH ratio {ldh_ratio:.2} vs cutoff {LDH_RATIO_CUTOFF}"),
        ),
    ];

    let assessment = if protein_met || ldh_met {
        let met = [(protein_met, "protein ratio"), (ldh_met, "LDH ratio")]
            .iter()
            .filter(|(met, _)| *met)
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(" and ");
        Assessment::new(
            "Exudate",
            format!("Exudative effusion ({met} criterion met)."),
            "Diagnostic workup for infection, malignancy, or inflammation; look for septations or loculations on imaging.",
        )
    } else {
        Assessment::new(
            "Transudate",
            "Transudative effusion; no Light's criterion met.",
            "Treat the underlying systemic cause (heart failure, cirrhosis, nephrotic syndrome).",
        )
    };

    Ok(assessment.with_components(components))
}

/// The irregular, non-circumscribed mass branch takes precedence over calcifications.
fn birads_features(values: &FieldValues<'_>) -> Result<Assessment, ValidationError> {
    let irregular = values.choice("shape")? == "Irregular";
    let not_circumscribed = values.choice("margin")? == "Not-circumscribed";
    let calcifications = values.choice("calcifications")? == "Yes";

    let assessment = if irregular && not_circumscribed {
        Assessment::new(
            "BI-RADS 4",
            "Suspicious abnormality: irregular mass with non-circumscribed margin.",
            "Tissue diagnosis with image-guided biopsy.",
        )
    } else if irregular || not_circumscribed || calcifications {
        Assessment::new(
            "BI-RADS 3",
            "Probably benign: a single indeterminate descriptor.",
            "Short-interval (6-month) follow-up imaging.",
        )
    } else {
        Assessment::new(
            "BI-RADS 2",
            "Benign: oval or round circumscribed mass without calcifications.",
            "Routine screening.",
        )
    };

    Ok(assessment)
}

pub(super) fn definitions() -> Result<Vec<ClassificationDefinition>, DefinitionError> {
    Ok(vec![
        lookup_system(
            "stanford",
            CARDIOTHORACIC,
            "Stanford (Aortic Dissection)",
            "Dissection type by involvement of the ascending aorta.",
            "Stanford type",
            LookupTable::new(
                "type",
                &[
                    ("Type A", "Stanford Type A", "Involves the ascending aorta regardless of origin.", "Surgical emergency; immediate cardiothoracic surgery referral."),
                    ("Type B", "Stanford Type B", "Does not involve the ascending aorta.", "Medical management with blood pressure control; TEVAR if complicated."),
                ],
            ),
        )?,
        lookup_system(
            "debakey",
            CARDIOTHORACIC,
            "DeBakey (Aortic Dissection)",
            "Dissection type by site of origin and extent.",
            "DeBakey type",
            LookupTable::new(
                "type",
                &[
                    ("Type I", "DeBakey Type I", "Originates in the ascending aorta and extends beyond the arch.", "Emergency surgical repair."),
                    ("Type II", "DeBakey Type II", "Confined to the ascending aorta.", "Emergency surgical repair."),
                    ("Type III", "DeBakey Type III", "Originates in the descending aorta (IIIa thoracic, IIIb below the diaphragm).", "Medical management; endovascular repair if complicated."),
                ],
            ),
        )?,
        ClassificationDefinition::new(
            "qanadli",
            CARDIOTHORACIC,
            "Pulmonary Embolism (Qanadli Score)",
            "Clot burden on CT pulmonary angiography: 1 point per partially and 2 per completely occluded segmental artery (maximum 40).",
            vec![
                FieldSchema::integer(
                    "partial_occlusions",
                    "Partially occluded segmental arteries",
                    0,
                    20,
                    0,
                ),
                FieldSchema::integer(
                    "complete_occlusions",
                    "Completely occluded segmental arteries",
                    0,
                    20,
                    0,
                ),
            ],
            Rule::Computed(qanadli),
        )?,
        lookup_system(
            "lung-rads",
            CARDIOTHORACIC,
            "Lung-RADS",
            "Lung cancer screening on low-dose CT by nodule size, composition, and growth.",
            "Lung-RADS category",
            LookupTable::new(
                "category",
                &[
                    ("0", "Lung-RADS 0", "Incomplete: prior CT for comparison or part of lungs not evaluable.", "Additional imaging or comparison needed."),
                    ("1", "Lung-RADS 1", "Negative: no nodules or definitely benign nodules.", "Continue annual screening with LDCT in 12 months."),
                    ("2", "Lung-RADS 2", "Benign appearance or behavior.", "Continue annual screening with LDCT in 12 months."),
                    ("3", "Lung-RADS 3", "Probably benign.", "LDCT in 6 months."),
                    ("4A", "Lung-RADS 4A", "Suspicious.", "LDCT in 3 months; PET-CT if solid component 8 mm or more."),
                    ("4B", "Lung-RADS 4B", "Very suspicious.", "Chest CT with or without contrast, PET-CT, and/or tissue sampling."),
                    ("4X", "Lung-RADS 4X", "Category 3 or 4 nodule with additional features increasing suspicion.", "Chest CT, PET-CT, and/or tissue sampling."),
                ],
            ),
        )?,
        lookup_system(
            "rsna-covid",
            CARDIOTHORACIC,
            "COVID-19 Chest Imaging (RSNA)",
            "RSNA consensus reporting categories for COVID-19 pneumonia on CT.",
            "RSNA category",
            LookupTable::new(
                "category",
                &[
                    ("Typical", "Typical appearance", "Bilateral, peripheral ground-glass opacities with or without consolidation.", "Findings commonly reported in COVID-19; correlate with RT-PCR."),
                    ("Indeterminate", "Indeterminate appearance", "Nonspecific distribution of ground-glass opacity.", "Correlate with clinical and laboratory findings."),
                    ("Atypical", "Atypical appearance", "Isolated lobar consolidation, discrete nodules, cavitation, or pleural effusion.", "Consider alternative diagnoses."),
                    ("Negative", "Negative for pneumonia", "No CT features of pneumonia.", "No imaging evidence of pneumonia; CT may be negative early in disease."),
                ],
            ),
        )?,
        ClassificationDefinition::new(
            "lights-criteria",
            CARDIOTHORACIC,
            "Light's Criteria (Pleural Effusion)",
            "Exudate versus transudate from pleural fluid to serum protein and LDH ratios.",
            vec![
                FieldSchema::decimal(
                    "protein_ratio",
                    "Pleural fluid protein / serum protein ratio",
                    0.0,
                    5.0,
                    0.5,
                ),
                FieldSchema::decimal(
                    "ldh_ratio",
                    "Pleural fluid LDH / serum LDH ratio",
                    0.0,
                    5.0,
                    1.0,
                ),
            ],
            Rule::Computed(lights_criteria),
        )?,
        lookup_system(
            "ats-ers-iip",
            CARDIOTHORACIC,
            "ATS/ERS Classification (Idiopathic Interstitial Pneumonias)",
            "Interstitial lung disease pattern on HRCT.",
            "Pattern",
            LookupTable::new(
                "pattern",
                &[
                    ("UIP", "UIP pattern", "Subpleural, basal-predominant honeycombing with traction bronchiectasis.", "Consistent with IPF in the right clinical context; antifibrotic therapy discussion."),
                    ("NSIP", "NSIP pattern", "Symmetric basal ground-glass with subpleural sparing.", "Evaluate for connective tissue disease; multidisciplinary discussion."),
                    ("COP", "COP pattern", "Patchy peripheral or peribronchovascular consolidation, reversed halo sign.", "Corticosteroid therapy; follow-up CT to confirm response."),
                    ("Other", "Other pattern", "Pattern not classifiable as UIP, NSIP, or COP.", "Multidisciplinary discussion; consider surgical lung biopsy."),
                ],
            ),
        )?,
        ClassificationDefinition::new(
            "birads-features",
            CARDIOTHORACIC,
            "Breast (BI-RADS)",
            "Assessment category estimated from mass shape, margin, and calcifications.",
            vec![
                FieldSchema::first_of("shape", "Mass shape", &["Oval", "Round", "Irregular"]),
                FieldSchema::first_of(
                    "margin",
                    "Mass margin",
                    &["Circumscribed", "Not-circumscribed"],
                ),
                FieldSchema::first_of("calcifications", "Associated calcifications", &["No", "Yes"]),
            ],
            Rule::Computed(birads_features),
        )?,
    ])
}
