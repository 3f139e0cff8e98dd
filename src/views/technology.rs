//! Technology tab. Static description of the analysis pipeline.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PipelineStage {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TechnologyView {
    pub title: &'static str,
    pub stages: Vec<PipelineStage>,
    pub disclaimer: &'static str,
}

impl TechnologyView {
    pub fn build() -> Self {
        Self {
            title: "How the Auditor Works",
            stages: vec![
                PipelineStage {
                    name: "Static Analysis",
                    description: "Parses contract source into an AST and checks it against known vulnerability patterns.",
                },
                PipelineStage {
                    name: "Bytecode Inspection",
                    description: "Decompiles deployed bytecode when only an address is available.",
                },
                PipelineStage {
                    name: "ML Risk Prediction",
                    description: "Scores likely attack vectors from call graphs and external data dependencies.",
                },
            ],
            disclaimer: "Results are simulated. No real analysis is performed.",
        }
    }
}
