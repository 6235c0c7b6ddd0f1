use super::super::domain::{Assessment, FieldSchema};
use super::super::evaluation::{
    ClassificationDefinition, DefinitionError, FieldValues, LookupTable, Rule, ValidationError,
};
use super::{lookup_system, HEAD_AND_NECK};

/// Generic stage grouping; the highest-priority matching row wins.
fn tnm(values: &FieldValues<'_>) -> Result<Assessment, ValidationError> {
    let t = values.integer("t_stage")?;
    let n = values.integer("n_stage")?;
    let m = values.choice("m_stage")?;

    let (stage, interpretation, recommendation) = if m == "1" {
        (
            "Stage IVC",
            "Distant metastatic disease.",
            "Systemic therapy; palliative locoregional treatment as indicated.",
        )
    } else if n == 3 {
        (
            "Stage IVB",
            "Very advanced nodal disease.",
            "Multidisciplinary tumor board; concurrent chemoradiation.",
        )
    } else if t == 4 || n == 2 {
        (
            "Stage IVA",
            "Locally advanced primary or multiple/bilateral nodal disease.",
            "Multimodality treatment: surgery and/or chemoradiation.",
        )
    } else if t == 3 || n == 1 {
        (
            "Stage III",
            "Large primary or single ipsilateral nodal metastasis.",
            "Combined modality treatment; tumor board review.",
        )
    } else if t == 2 {
        (
            "Stage II",
            "Intermediate-size primary without nodal disease.",
            "Single-modality treatment (surgery or radiotherapy).",
        )
    } else if t == 1 {
        (
            "Stage I",
            "Small primary without nodal disease.",
            "Single-modality treatment (surgery or radiotherapy).",
        )
    } else {
        (
            "No evidence of primary",
            "No primary tumor identified and no nodal or distant disease.",
            "Clinical and endoscopic correlation; PET-CT if an occult primary is suspected.",
        )
    };

    Ok(Assessment::new(
        format!("T{t} N{n} M{m} ({stage})"),
        interpretation,
        recommendation,
    ))
}

pub(super) fn definitions() -> Result<Vec<ClassificationDefinition>, DefinitionError> {
    Ok(vec![
        ClassificationDefinition::new(
            "tnm-head-neck",
            HEAD_AND_NECK,
            "TNM Staging (AJCC) for Head & Neck Cancers",
            "Primary tumor (T), nodal involvement (N), and distant metastasis (M).",
            vec![
                FieldSchema::integer("t_stage", "Tumor (T) stage", 0, 4, 2),
                FieldSchema::integer("n_stage", "Node (N) stage", 0, 3, 1),
                FieldSchema::choice("m_stage", "Metastasis (M) stage", &["0", "1"], "0"),
            ],
            Rule::Computed(tnm),
        )?,
        lookup_system(
            "lugano",
            HEAD_AND_NECK,
            "Lugano Classification (Lymphoma)",
            "Nodal station involvement, extranodal lesions, and marrow uptake, usually on PET-CT.",
            "Lugano stage",
            LookupTable::new(
                "stage",
                &[
                    ("I", "Lugano Stage I", "One node or a group of adjacent nodes.", "Limited-stage therapy; interim PET-CT response assessment."),
                    ("II", "Lugano Stage II", "Two or more nodal groups on the same side of the diaphragm.", "Limited-stage therapy; bulky disease may be treated as advanced."),
                    ("III", "Lugano Stage III", "Nodes on both sides of the diaphragm, or nodes above with splenic involvement.", "Advanced-stage systemic therapy."),
                    ("IV", "Lugano Stage IV", "Additional noncontiguous extralymphatic involvement.", "Advanced-stage systemic therapy; end-of-treatment PET-CT."),
                ],
            ),
        )?,
        lookup_system(
            "friedman",
            HEAD_AND_NECK,
            "Friedman Staging for Tonsillar Hypertrophy",
            "Degree of tonsillar hypertrophy causing oropharyngeal airway obstruction.",
            "Friedman stage",
            LookupTable::new(
                "stage",
                &[
                    ("1", "Friedman Stage 1", "Tonsils within the tonsillar pillars.", "Little airway contribution; evaluate other obstruction sites."),
                    ("2", "Friedman Stage 2", "Tonsils extend to the pillars.", "Clinical correlation with sleep study."),
                    ("3", "Friedman Stage 3", "Tonsils extend beyond the pillars.", "Consider tonsillectomy if symptomatic obstruction."),
                    ("4", "Friedman Stage 4", "Tonsils extend to the midline.", "Tonsillectomy is usually indicated for obstructive symptoms."),
                ],
            ),
        )?,
    ])
}
