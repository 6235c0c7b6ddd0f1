use super::super::evaluation::{ClassificationDefinition, DefinitionError, LookupTable};
use super::{lookup_system, MUSCULOSKELETAL};

pub(super) fn definitions() -> Result<Vec<ClassificationDefinition>, DefinitionError> {
    Ok(vec![
        lookup_system(
            "ao-ota",
            MUSCULOSKELETAL,
            "AO/OTA Fracture Classification (Long Bones)",
            "Fracture pattern by bone segment and articular involvement.",
            "Fracture pattern",
            LookupTable::new(
                "pattern",
                &[
                    ("Simple", "Simple fracture", "Single circumferential disruption (spiral, oblique, or transverse).", "Anatomic reduction with absolute stability when operative."),
                    ("Wedge", "Wedge fracture", "Intermediate fragment with contact between main fragments after reduction.", "Relative or absolute stability depending on the segment."),
                    ("Complex", "Complex (multifragmentary) fracture", "Several intermediate fragments without main fragment contact.", "Bridging fixation with relative stability."),
                ],
            ),
        )?,
        lookup_system(
            "gustilo-anderson",
            MUSCULOSKELETAL,
            "Gustilo-Anderson (Open Fractures)",
            "Open fracture severity by wound size and soft-tissue damage.",
            "Gustilo-Anderson type",
            LookupTable::new(
                "type",
                &[
                    ("I", "Gustilo Type I", "Clean wound under 1 cm.", "Antibiotics (first-generation cephalosporin) and debridement."),
                    ("II", "Gustilo Type II", "Wound 1 to 10 cm without extensive soft-tissue damage.", "Antibiotics and operative debridement."),
                    ("III", "Gustilo Type III", "Wound over 10 cm or severe soft-tissue injury.", "Broad-spectrum antibiotics, urgent debridement, staged soft-tissue coverage."),
                ],
            ),
        )?,
        lookup_system(
            "tscherne",
            MUSCULOSKELETAL,
            "Tscherne Classification (Soft Tissue Injuries)",
            "Soft-tissue injury severity associated with closed fractures.",
            "Tscherne grade",
            LookupTable::new(
                "grade",
                &[
                    ("I", "Tscherne Grade I", "Superficial abrasion or contusion.", "Standard fracture care."),
                    ("II", "Tscherne Grade II", "Deep contaminated abrasion with local contusion.", "Delay definitive fixation until soft tissues recover."),
                    ("III", "Tscherne Grade III", "Extensive contusion, crush, or muscle destruction.", "Monitor for compartment syndrome; staged fixation."),
                    ("IV", "Tscherne Grade IV", "Subtotal or total amputation.", "Emergency surgical management."),
                ],
            ),
        )?,
        lookup_system(
            "salter-harris",
            MUSCULOSKELETAL,
            "Salter-Harris (Physeal Fractures)",
            "Pediatric growth plate fractures; types I to V describe increasing physeal involvement.",
            "Salter-Harris type",
            LookupTable::new(
                "type",
                &[
                    ("I", "Salter-Harris I", "Fracture through the physis only.", "Closed management; good prognosis."),
                    ("II", "Salter-Harris II", "Physis and metaphysis.", "Closed reduction and casting usually sufficient."),
                    ("III", "Salter-Harris III", "Physis and epiphysis, intra-articular.", "Anatomic reduction, often operative."),
                    ("IV", "Salter-Harris IV", "Through metaphysis, physis, and epiphysis.", "Open reduction and internal fixation; growth arrest risk."),
                    ("V", "Salter-Harris V", "Compression injury of the physis.", "Close follow-up for growth disturbance."),
                ],
            ),
        )?,
        lookup_system(
            "garden",
            MUSCULOSKELETAL,
            "Garden (Femoral Neck)",
            "Femoral neck fracture by completeness and displacement.",
            "Garden stage",
            LookupTable::new(
                "stage",
                &[
                    ("I", "Garden I", "Incomplete or valgus-impacted fracture.", "Internal fixation."),
                    ("II", "Garden II", "Complete, nondisplaced fracture.", "Internal fixation."),
                    ("III", "Garden III", "Complete, partially displaced fracture.", "Arthroplasty in older patients; reduction and fixation in the young."),
                    ("IV", "Garden IV", "Complete, fully displaced fracture.", "Arthroplasty in older patients; urgent reduction and fixation in the young."),
                ],
            ),
        )?,
        lookup_system(
            "pauwels",
            MUSCULOSKELETAL,
            "Pauwels (Femoral Neck)",
            "Femoral neck fracture by fracture-line angle from horizontal.",
            "Pauwels type",
            LookupTable::new(
                "type",
                &[
                    ("I", "Pauwels I", "Fracture angle under 30 degrees; compressive forces dominate.", "Stable; internal fixation."),
                    ("II", "Pauwels II", "Fracture angle 30 to 50 degrees.", "Internal fixation with attention to shear forces."),
                    ("III", "Pauwels III", "Fracture angle over 50 degrees; shear forces dominate.", "Unstable; fixed-angle fixation; higher nonunion risk."),
                ],
            ),
        )?,
        lookup_system(
            "neer",
            MUSCULOSKELETAL,
            "Neer (Proximal Humerus)",
            "Proximal humerus fracture by number of displaced parts.",
            "Neer classification",
            LookupTable::new(
                "parts",
                &[
                    ("One-Part", "Neer one-part", "No segment displaced more than 1 cm or angulated over 45 degrees.", "Sling and early mobilisation."),
                    ("Two-Part", "Neer two-part", "One displaced segment.", "Closed reduction or fixation depending on segment."),
                    ("Three-Part", "Neer three-part", "Two displaced segments.", "Open reduction and internal fixation."),
                    ("Four-Part", "Neer four-part", "Three displaced segments; high avascular necrosis risk.", "Arthroplasty or fixation in selected patients."),
                ],
            ),
        )?,
        lookup_system(
            "weber",
            MUSCULOSKELETAL,
            "Weber (Ankle)",
            "Ankle fracture by level of the fibular fracture relative to the syndesmosis.",
            "Weber type",
            LookupTable::new(
                "type",
                &[
                    ("A", "Weber A", "Below the syndesmosis; syndesmosis intact.", "Usually stable; conservative treatment."),
                    ("B", "Weber B", "At the level of the syndesmosis.", "Stress views to assess stability; fixation if unstable."),
                    ("C", "Weber C", "Above the syndesmosis; syndesmotic disruption.", "Unstable; open reduction and internal fixation."),
                ],
            ),
        )?,
        lookup_system(
            "lauge-hansen",
            MUSCULOSKELETAL,
            "Lauge-Hansen (Ankle)",
            "Ankle fracture by foot position and deforming force.",
            "Mechanism",
            LookupTable::new(
                "mechanism",
                &[
                    ("Supination-External Rotation", "SER", "Most common pattern; spiral fibular fracture at the syndesmosis.", "Assess medial side for stability."),
                    ("Pronation-External Rotation", "PER", "High fibular fracture with syndesmotic injury.", "Operative fixation with syndesmotic assessment."),
                    ("Supination-Adduction", "SAD", "Transverse lateral malleolus with vertical medial fracture.", "Evaluate medial plafond impaction."),
                    ("Pronation-Abduction", "PAB", "Comminuted fibular fracture at the level of the joint.", "Operative fixation."),
                ],
            ),
        )?,
        lookup_system(
            "frykman",
            MUSCULOSKELETAL,
            "Frykman (Distal Radius)",
            "Distal radius fracture by joint involvement and ulnar styloid fracture.",
            "Frykman type",
            LookupTable::new(
                "type",
                &[
                    ("I", "Frykman I", "Extra-articular, no ulnar styloid fracture.", "Closed reduction and casting."),
                    ("II", "Frykman II", "Extra-articular with ulnar styloid fracture.", "Closed reduction and casting."),
                    ("III", "Frykman III", "Radiocarpal joint involvement.", "Assess articular step-off; fixation if displaced."),
                    ("IV", "Frykman IV", "Radiocarpal joint with ulnar styloid fracture.", "Assess articular step-off; fixation if displaced."),
                    ("V", "Frykman V", "Distal radioulnar joint involvement.", "Assess DRUJ stability."),
                    ("VI", "Frykman VI", "DRUJ with ulnar styloid fracture.", "Assess DRUJ stability."),
                    ("VII", "Frykman VII", "Radiocarpal and DRUJ involvement.", "Operative fixation usually required."),
                    ("VIII", "Frykman VIII", "Radiocarpal and DRUJ with ulnar styloid fracture.", "Operative fixation usually required."),
                ],
            ),
        )?,
        lookup_system(
            "sanders",
            MUSCULOSKELETAL,
            "Sanders (Calcaneal)",
            "Intra-articular calcaneal fracture by posterior facet fragments on coronal CT.",
            "Sanders type",
            LookupTable::new(
                "type",
                &[
                    ("I", "Sanders I", "Nondisplaced posterior facet fracture.", "Nonoperative management."),
                    ("II", "Sanders II", "Two-part posterior facet fracture.", "Open reduction and internal fixation."),
                    ("III", "Sanders III", "Three-part fracture with depressed central fragment.", "Open reduction and internal fixation."),
                    ("IV", "Sanders IV", "Comminuted four or more part fracture.", "Fixation or primary subtalar arthrodesis."),
                ],
            ),
        )?,
        lookup_system(
            "mayo-olecranon",
            MUSCULOSKELETAL,
            "Mayo (Olecranon)",
            "Olecranon fracture by displacement and ulnohumeral stability.",
            "Mayo classification",
            LookupTable::new(
                "stability",
                &[
                    ("Stable", "Mayo stable", "Ulnohumeral joint stable.", "Nondisplaced: immobilisation; displaced: tension band or plate fixation."),
                    ("Unstable", "Mayo unstable", "Ulnohumeral instability (Mayo type III).", "Plate fixation with ligamentous assessment."),
                ],
            ),
        )?,
    ])
}
