use super::super::evaluation::{ClassificationDefinition, DefinitionError, LookupTable};
use super::{lookup_system, RADS};

pub(super) fn bi_rads() -> Result<ClassificationDefinition, DefinitionError> {
    lookup_system(
        "bi-rads",
        RADS,
        "BI-RADS (Breast)",
        "Standardized breast imaging assessment categories 0 to 6.",
        "BI-RADS category",
        LookupTable::new(
            "category",
            &[
                ("0", "BI-RADS 0", "Incomplete: needs additional imaging or prior comparison.", "Recall for additional imaging."),
                ("1", "BI-RADS 1", "Negative.", "Routine screening."),
                ("2", "BI-RADS 2", "Benign finding.", "Routine screening."),
                ("3", "BI-RADS 3", "Probably benign (2% or less likelihood of malignancy).", "Short-interval (6-month) follow-up."),
                ("4", "BI-RADS 4", "Suspicious abnormality.", "Tissue diagnosis."),
                ("5", "BI-RADS 5", "Highly suggestive of malignancy (95% or more).", "Tissue diagnosis and appropriate action."),
                ("6", "BI-RADS 6", "Known biopsy-proven malignancy.", "Surgical excision when clinically appropriate."),
            ],
        ),
    )
}

pub(super) fn ni_rads() -> Result<ClassificationDefinition, DefinitionError> {
    lookup_system(
        "ni-rads",
        RADS,
        "NI-RADS (Neck)",
        "Surveillance of treated head and neck cancer on contrast CT or PET-CT.",
        "NI-RADS category",
        LookupTable::new(
            "category",
            &[
                ("1", "NI-RADS 1", "No evidence of recurrence.", "Routine surveillance."),
                ("2", "NI-RADS 2", "Low suspicion.", "Direct inspection for mucosal sites; short-interval imaging or PET for deep abnormalities."),
                ("3", "NI-RADS 3", "High suspicion.", "Biopsy."),
                ("4", "NI-RADS 4", "Definite recurrence.", "Clinical management; no biopsy needed if pathology already proven."),
            ],
        ),
    )
}
