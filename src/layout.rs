//! Layout pass: mirror the view tree into a fresh taffy tree, compute it for
//! the viewport size, and store each view's absolute rectangle.

use peniko::kurbo::{Point, Rect};
use slotmap::SecondaryMap;
use taffy::{TaffyTree, geometry::Size, style::AvailableSpace, tree::NodeId};
use tracing::warn;

use crate::{error::Result, grid_template::GridTemplate, id::ViewId};

pub(crate) fn compute_layout(root: ViewId, width: f64, height: f64) -> Result<()> {
    let mut taffy: TaffyTree<()> = TaffyTree::new();
    taffy.disable_rounding();

    let mut nodes = SecondaryMap::new();
    let root_node = build_node(&mut taffy, root, None, &mut nodes)?;
    taffy.compute_layout(
        root_node,
        Size {
            width: AvailableSpace::Definite(width as f32),
            height: AvailableSpace::Definite(height as f32),
        },
    )?;

    place(&taffy, root, Point::ZERO, &nodes)
}

/// Children that take part in layout, looking through transparent views.
fn layout_children(id: ViewId) -> Vec<ViewId> {
    let mut children = Vec::new();
    for child in id.children() {
        let transparent = child
            .view()
            .is_some_and(|view| view.borrow().is_transparent());
        if transparent {
            children.extend(layout_children(child));
        } else {
            children.push(child);
        }
    }
    children
}

fn build_node(
    taffy: &mut TaffyTree<()>,
    id: ViewId,
    parent_template: Option<&GridTemplate>,
    nodes: &mut SecondaryMap<ViewId, NodeId>,
) -> Result<NodeId> {
    let style = id.style();
    let mut taffy_style = style.to_taffy();

    let template = id
        .view()
        .and_then(|view| view.borrow().grid_template().cloned());
    if let Some(template) = &template {
        template.apply_to(&mut taffy_style);
    }

    if let (Some(parent_template), Some(area)) = (parent_template, style.get_grid_area()) {
        match parent_template.placement(area) {
            Ok(placement) => placement.apply_to(&mut taffy_style),
            Err(err) => warn!(%err, template = %parent_template, "placing grid item automatically"),
        }
    }

    let mut children = Vec::new();
    for child in layout_children(id) {
        children.push(build_node(taffy, child, template.as_ref(), nodes)?);
    }

    let node = taffy.new_with_children(taffy_style, &children)?;
    nodes.insert(id, node);
    Ok(node)
}

fn place(
    taffy: &TaffyTree<()>,
    id: ViewId,
    origin: Point,
    nodes: &SecondaryMap<ViewId, NodeId>,
) -> Result<()> {
    let child_origin = match nodes.get(id) {
        Some(node) => {
            let layout = taffy.layout(*node)?;
            let rect = Rect::from_origin_size(
                (
                    origin.x + layout.location.x as f64,
                    origin.y + layout.location.y as f64,
                ),
                (layout.size.width as f64, layout.size.height as f64),
            );
            id.set_layout_rect(Some(rect));
            rect.origin()
        }
        // Transparent views have no box; their children are positioned
        // relative to the nearest laid out ancestor.
        None => {
            id.set_layout_rect(None);
            origin
        }
    };

    for child in id.children() {
        place(taffy, child, child_origin, nodes)?;
    }
    Ok(())
}
