use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::registry::PluginRegistry;

/// When declared dependencies are checked against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyCheck {
    /// Dependencies must be registered before their dependents.
    #[default]
    AtRegistration,
    /// Registration accepts any order; missing dependencies surface when booting.
    AtBoot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

#[derive(Debug)]
struct Frame {
    id: String,
    deps: Vec<String>,
    next: usize,
}

/// Computes a dependency-first boot order without touching registry state.
///
/// Walks the graph with an explicit stack. Nodes on the current path are
/// `Visiting`; meeting one again means a cycle. Already booted and disabled
/// plugins end the walk on that branch and are left out of the order.
pub(crate) struct BootPlan<'a> {
    registry: &'a PluginRegistry,
    marks: HashMap<String, Mark>,
    order: Vec<String>,
}

impl<'a> BootPlan<'a> {
    pub(crate) fn new(registry: &'a PluginRegistry) -> Self {
        Self {
            registry,
            marks: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Adds `root` and everything it needs to the plan.
    pub(crate) fn visit(&mut self, root: &str) -> Result<(), PluginSystemError> {
        if self.marks.contains_key(root) {
            return Ok(());
        }

        let mut stack: Vec<Frame> = Vec::new();
        if let Some(frame) = self.enter(root, None)? {
            stack.push(frame);
        }

        while let Some(top) = stack.len().checked_sub(1) {
            let next_dep = {
                let frame = &mut stack[top];
                let dep = frame.deps.get(frame.next).cloned();
                if dep.is_some() {
                    frame.next += 1;
                }
                dep
            };

            match next_dep {
                Some(dep) => match self.marks.get(&dep).copied() {
                    Some(Mark::Done) => {}
                    Some(Mark::Visiting) => return Err(cycle_through(&stack, &dep)),
                    None => {
                        let parent = stack[top].id.clone();
                        if let Some(frame) = self.enter(&dep, Some(&parent))? {
                            stack.push(frame);
                        }
                    }
                },
                None => {
                    if let Some(frame) = stack.pop() {
                        self.marks.insert(frame.id.clone(), Mark::Done);
                        self.order.push(frame.id);
                    }
                }
            }
        }

        Ok(())
    }

    /// The planned ids, dependencies first.
    pub(crate) fn into_order(self) -> Vec<String> {
        self.order
    }

    fn enter(&mut self, id: &str, required_by: Option<&str>) -> Result<Option<Frame>, PluginSystemError> {
        let registry = self.registry;
        if registry.is_booted(id) {
            self.marks.insert(id.to_string(), Mark::Done);
            return Ok(None);
        }

        let plugin = match registry.lookup(id) {
            Some(plugin) => plugin,
            None => {
                return Err(match required_by {
                    Some(dependent) => PluginSystemError::UnsatisfiedDependency {
                        plugin_id: dependent.to_string(),
                        missing: vec![id.to_string()],
                    },
                    None => PluginSystemError::not_registered(id),
                });
            }
        };

        if !plugin.is_enabled() {
            log::debug!("Plugin '{}' is disabled, skipping boot", id);
            self.marks.insert(id.to_string(), Mark::Done);
            return Ok(None);
        }

        self.marks.insert(id.to_string(), Mark::Visiting);
        Ok(Some(Frame {
            id: id.to_string(),
            deps: plugin.dependencies(),
            next: 0,
        }))
    }
}

fn cycle_through(stack: &[Frame], repeated: &str) -> PluginSystemError {
    let start = stack.iter().position(|f| f.id == repeated).unwrap_or(0);
    let mut cycle: Vec<String> = stack[start..].iter().map(|f| f.id.clone()).collect();
    cycle.push(repeated.to_string());
    PluginSystemError::CyclicDependency { cycle }
}
