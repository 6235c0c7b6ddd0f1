use super::super::evaluation::{ClassificationDefinition, DefinitionError, LookupTable};
use super::{lookup_system, VASCULAR};

pub(super) fn definitions() -> Result<Vec<ClassificationDefinition>, DefinitionError> {
    Ok(vec![
        lookup_system(
            "tici",
            VASCULAR,
            "TICI Score (Thrombolysis in Cerebral Infarction)",
            "Reperfusion after acute stroke intervention, from 0 (no perfusion) to 3 (full perfusion).",
            "TICI grade",
            LookupTable::new(
                "grade",
                &[
                    ("0", "TICI 0", "No perfusion beyond the occlusion.", "Failed recanalization; consider further attempts if within window."),
                    ("1", "TICI 1", "Minimal penetration without distal perfusion.", "Failed recanalization."),
                    ("2a", "TICI 2a", "Partial filling of less than half of the territory.", "Incomplete reperfusion; consider further passes."),
                    ("2b", "TICI 2b", "Partial filling of half or more of the territory.", "Successful reperfusion."),
                    ("3", "TICI 3", "Complete perfusion.", "Complete reperfusion; standard post-thrombectomy care."),
                ],
            ),
        )?,
        lookup_system(
            "hamburg",
            VASCULAR,
            "Hamburg Classification (Vascular Malformations)",
            "Vascular malformations by predominant vessel type, flow dynamics, and embryologic origin.",
            "Hamburg type",
            LookupTable::new(
                "type",
                &[
                    ("Type I", "Hamburg Type I", "Predominantly venous malformation (low flow).", "Compression therapy; sclerotherapy for symptomatic lesions."),
                    ("Type II", "Hamburg Type II", "Predominantly arterial or arteriovenous shunting (high flow).", "Embolization planning with angiography."),
                    ("Type III", "Hamburg Type III", "Lymphatic or combined malformation.", "Multidisciplinary vascular anomalies clinic."),
                ],
            ),
        )?,
        lookup_system(
            "varc",
            VASCULAR,
            "VARC Criteria for TAVR Outcomes",
            "Valve Academic Research Consortium outcome domains after transcatheter aortic valve replacement.",
            "VARC outcome category",
            LookupTable::new(
                "category",
                &[
                    ("Device Success", "Device success", "Correct valve position, expected performance, and no repeat procedure.", "Routine post-TAVR follow-up imaging."),
                    ("Early Safety", "Early safety", "Composite of 30-day mortality, stroke, bleeding, and vascular complications.", "Review periprocedural complications."),
                    ("Clinical Efficacy", "Clinical efficacy", "Composite outcome after 30 days including valve-related symptoms.", "Long-term echocardiographic surveillance."),
                ],
            ),
        )?,
    ])
}
