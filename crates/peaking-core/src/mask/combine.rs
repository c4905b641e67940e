use ndarray::Zip;

use crate::error::{PeakingError, Result};
use crate::frame::Mask;
use crate::pipeline::PipelineStage;

use super::morphology::{dilate, morphological_opening};

/// Restrict edges to regions judged in focus.
///
/// The focus mask is first opened to drop isolated specks, then intersected
/// with the edge map. With `dilate_result` the surviving edges are dilated
/// once to read as continuous strokes.
pub fn combine_masks(edges: &Mask, focus: &Mask, dilate_result: bool) -> Result<Mask> {
    if edges.dim() != focus.dim() {
        return Err(PeakingError::ShapeMismatch {
            stage: PipelineStage::Combining,
            expected: focus.dim(),
            actual: edges.dim(),
        });
    }

    let opened = morphological_opening(focus);
    let in_focus_edges = Zip::from(edges)
        .and(&opened)
        .map_collect(|&edge, &sharp| edge && sharp);

    Ok(if dilate_result {
        dilate(&in_focus_edges)
    } else {
        in_focus_edges
    })
}
