//! The schematic rendering seam.
//!
//! Rendering is a pure function of a combination, kept behind a narrow trait
//! so the drawing technology can be swapped without touching the search
//! engine.

use crate::display::format_resistance;
use crate::search::{Combination, Topology};

/// Turns a combination into some drawable description.
pub trait Diagram {
    fn render(&self, combination: &Combination) -> String;
}

/// Graphviz DOT output: a left-to-right chain for series, a fan between two
/// junction points for parallel. Components are boxes labelled with their
/// formatted value.
#[derive(Debug, Default, Clone, Copy)]
pub struct DotDiagram;

impl Diagram for DotDiagram {
    fn render(&self, combination: &Combination) -> String {
        let names: Vec<String> = (1..=combination.len()).map(|i| format!("R{i}")).collect();
        let mut lines = vec![
            "digraph G {".to_string(),
            "    rankdir=LR;".to_string(),
            "    node [shape=box];".to_string(),
        ];
        match combination.topology() {
            Topology::Series => {
                lines.push(format!("    In -> {} -> Out;", names.join(" -> ")));
            }
            Topology::Parallel => {
                lines.push("    In [shape=point]; Out [shape=point];".to_string());
                for name in &names {
                    lines.push(format!("    In -> {name} -> Out;"));
                }
            }
        }
        for (name, value) in names.iter().zip(combination.values()) {
            lines.push(format!(
                "    {name} [label=\"{}\"];",
                format_resistance(*value)
            ));
        }
        lines.push("}".to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_renders_a_chain() {
        let combination = Combination::new(Topology::Series, vec![100.0, 220.0]);
        let dot = DotDiagram.render(&combination);
        assert!(dot.starts_with("digraph G {"));
        assert!(dot.contains("In -> R1 -> R2 -> Out;"));
        assert!(dot.contains("R1 [label=\"100 Ω\"];"));
        assert!(dot.contains("R2 [label=\"220 Ω\"];"));
        assert!(dot.ends_with('}'));
    }

    #[test]
    fn parallel_renders_a_fan() {
        let combination = Combination::new(Topology::Parallel, vec![1_000.0, 1_000.0, 2_200.0]);
        let dot = DotDiagram.render(&combination);
        assert!(dot.contains("In [shape=point]; Out [shape=point];"));
        for name in ["R1", "R2", "R3"] {
            assert!(dot.contains(&format!("In -> {name} -> Out;")));
        }
    }

    #[test]
    fn single_resistor_chain_is_still_wired() {
        let combination = Combination::new(Topology::Series, vec![330.0]);
        let dot = DotDiagram.render(&combination);
        assert!(dot.contains("In -> R1 -> Out;"));
    }
}
