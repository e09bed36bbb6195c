use crate::device::{Device, DeviceType};

/// One top-level row of the device tree: a master with its attached slaves,
/// or a childless floating device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub device: Device,
    pub children: Vec<Device>,
}

impl TreeNode {
    fn leaf(device: Device) -> Self {
        Self {
            device,
            children: Vec::new(),
        }
    }
}

/// Group a flat, source-ordered device list for display.
///
/// Relies on the tool listing each master immediately followed by its
/// slaves, so a single forward pass with a current-master pointer suffices.
/// There is no parent link in the short listing to validate against; if the
/// tool ever interleaved masters, slaves would silently attach to the
/// preceding master.
///
/// Floating devices go to a side bucket and come out as additional
/// top-level, childless nodes after everything else, in their original
/// order. Masters never appear as children.
pub fn group_by_master(devices: &[Device]) -> Vec<TreeNode> {
    let mut nodes: Vec<TreeNode> = Vec::new();
    let mut floating: Vec<Device> = Vec::new();
    let mut current: Option<usize> = None;

    for device in devices {
        if device.device_type == DeviceType::Floating {
            floating.push(device.clone());
            continue;
        }

        if device.is_master {
            nodes.push(TreeNode::leaf(device.clone()));
            current = Some(nodes.len() - 1);
        } else if let Some(idx) = current {
            nodes[idx].children.push(device.clone());
        } else {
            // Slave listed before any master: keep it visible at top level
            // rather than dropping it.
            nodes.push(TreeNode::leaf(device.clone()));
        }
    }

    nodes.extend(floating.into_iter().map(TreeNode::leaf));
    nodes
}
