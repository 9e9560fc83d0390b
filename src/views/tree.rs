use super::ProjectItem;

/// Identity of a mounted node. Ids increase monotonically and are never
/// reused, so a stale id can't resolve to a newer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Start,
    End,
}

#[derive(Debug, Clone)]
pub struct MountedItem {
    pub node: NodeId,
    pub element_id: String,
    pub item: ProjectItem,
}

/// A named container that item views attach under.
#[derive(Debug, Clone)]
pub struct Host {
    pub id: String,
    pub heading: String,
    pub droppable: bool,
    pub nodes: Vec<MountedItem>,
}

/// The display tree the terminal renderer draws from.
#[derive(Debug, Default)]
pub struct ViewTree {
    next_node: u64,
    hosts: Vec<Host>,
}

impl ViewTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if a host with this id already exists.
    pub fn add_host(&mut self, id: &str, heading: &str) -> bool {
        if self.host(id).is_some() {
            return false;
        }
        self.hosts.push(Host {
            id: id.to_string(),
            heading: heading.to_string(),
            droppable: false,
            nodes: Vec::new(),
        });
        true
    }

    /// Mounts `item` under `host_id`, tagged with the project id as its
    /// element id. Returns `None` if the host doesn't exist.
    pub fn attach(
        &mut self,
        host_id: &str,
        position: InsertPosition,
        item: ProjectItem,
    ) -> Option<NodeId> {
        let node = NodeId(self.next_node);
        let host = self.hosts.iter_mut().find(|h| h.id == host_id)?;
        self.next_node += 1;

        let mounted = MountedItem {
            node,
            element_id: item.project_id.to_string(),
            item,
        };
        match position {
            InsertPosition::Start => host.nodes.insert(0, mounted),
            InsertPosition::End => host.nodes.push(mounted),
        }
        Some(node)
    }

    pub fn detach(&mut self, node: NodeId) -> Option<MountedItem> {
        for host in &mut self.hosts {
            if let Some(pos) = host.nodes.iter().position(|m| m.node == node) {
                return Some(host.nodes.remove(pos));
            }
        }
        None
    }

    #[must_use]
    pub fn host(&self, id: &str) -> Option<&Host> {
        self.hosts.iter().find(|h| h.id == id)
    }

    #[must_use]
    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    #[must_use]
    pub fn locate(&self, node: NodeId) -> Option<(&Host, &MountedItem)> {
        self.hosts.iter().find_map(|host| {
            host.nodes
                .iter()
                .find(|m| m.node == node)
                .map(|mounted| (host, mounted))
        })
    }

    /// Number of mounted nodes tagged with `element_id`, across all hosts.
    #[must_use]
    pub fn count_element(&self, element_id: &str) -> usize {
        self.hosts
            .iter()
            .flat_map(|h| &h.nodes)
            .filter(|m| m.element_id == element_id)
            .count()
    }

    pub fn set_droppable(&mut self, host_id: &str, droppable: bool) -> bool {
        match self.hosts.iter_mut().find(|h| h.id == host_id) {
            Some(host) => {
                host.droppable = droppable;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.hosts.iter().map(|h| h.nodes.len()).sum()
    }
}
