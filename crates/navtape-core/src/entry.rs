//! Per-item display model for the navigation strip.

use crate::localize::Translate;

/// Navigation mode of the active task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskMode {
    /// A declared task flown in turnpoint order.
    Ordered,
    /// Direct navigation to a single waypoint.
    Goto,
    /// Navigation to a teammate position.
    Teammate,
    /// Abort mode: nearest landables.
    Abort,
    /// No task defined.
    None,
}

/// Task factory classification; only the area-task distinction is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFactory {
    #[default]
    Racing,
    Aat,
}

/// Category of a waypoint, used by the external icon renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaypointKind {
    #[default]
    Normal,
    Airfield,
    Landable,
    Mountain,
}

/// Minimal navigable-point record handed through to the waypoint-icon
/// renderer; the strip itself never interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waypoint {
    pub name: String,
    pub kind: WaypointKind,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, kind: WaypointKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// The one icon drawn next to the item name, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    /// Observation zone entered (or exited, for the start).
    Checkmark,
    /// Teammate navigation.
    Teammate,
    /// Navigating to a target inside an area-task zone.
    Target,
    /// Plain turnpoint, rendered by the external waypoint-icon renderer.
    Turnpoint,
    /// Nothing applies.
    None,
}

/// Everything the strip needs to draw one navigable item.
///
/// The entry is borrowed per draw call and never stored; measurements that
/// may be unavailable are `Option`s rather than value/valid-flag pairs.
#[derive(Debug, Clone)]
pub struct SlideEntry<'a> {
    /// Ordinal position within the task.
    pub index: usize,
    /// Number of points in the task.
    pub task_size: usize,
    /// Display name of the item.
    pub name: &'a str,
    /// The underlying waypoint, when one exists.
    pub waypoint: Option<&'a Waypoint>,
    /// Whether the item is navigable at all; invalid entries render only a
    /// placeholder.
    pub valid: bool,
    /// Distance to the item in meters.
    pub distance: Option<f64>,
    /// Arrival altitude difference in meters.
    pub altitude_difference: Option<f64>,
    /// Signed bearing delta to the item in degrees.
    pub delta_bearing: Option<f64>,
    /// Required glide ratio to reach the item.
    pub glide_ratio: Option<f64>,
    /// Observation zone entered.
    pub has_entered: bool,
    /// Observation zone exited.
    pub has_exited: bool,
    pub task_mode: TaskMode,
    pub task_factory: TaskFactory,
    /// Item is highlighted in the strip.
    pub selected: bool,
    /// Item is the active turnpoint.
    pub is_current: bool,
    /// Navigating to the target inside an area-task zone.
    pub navigate_to_target: bool,
}

impl<'a> SlideEntry<'a> {
    /// A valid entry with the given position and name; measurements unset.
    pub fn new(index: usize, task_size: usize, name: &'a str, task_mode: TaskMode) -> Self {
        Self {
            index,
            task_size,
            name,
            waypoint: None,
            valid: true,
            distance: None,
            altitude_difference: None,
            delta_bearing: None,
            glide_ratio: None,
            has_entered: false,
            has_exited: false,
            task_mode,
            task_factory: TaskFactory::default(),
            selected: false,
            is_current: false,
            navigate_to_target: false,
        }
    }

    pub fn is_start(&self) -> bool {
        self.index == 0
    }

    pub fn is_finish(&self) -> bool {
        self.index + 1 == self.task_size
    }

    pub fn is_ordered(&self) -> bool {
        self.task_mode == TaskMode::Ordered
    }

    pub fn is_teammate(&self) -> bool {
        self.task_mode == TaskMode::Teammate
    }

    pub fn is_area_task(&self) -> bool {
        self.task_factory == TaskFactory::Aat
    }

    /// Whether the entered/exited checkmark applies: ordered tasks with more
    /// than one point, entered for intermediate points, exited for the start.
    pub fn shows_checkmark(&self) -> bool {
        self.is_ordered()
            && self.task_size > 1
            && ((!self.is_start() && self.has_entered) || (self.is_start() && self.has_exited))
    }

    /// The single decoration icon for this entry, selected by priority:
    /// checkmark, then teammate, then target, then turnpoint.
    pub fn decoration(&self) -> Decoration {
        if self.shows_checkmark() {
            Decoration::Checkmark
        } else if self.is_teammate() {
            Decoration::Teammate
        } else if self.is_area_task() && self.navigate_to_target {
            Decoration::Target
        } else if self.waypoint.is_some() {
            Decoration::Turnpoint
        } else {
            Decoration::None
        }
    }

    /// The bearing delta, when the bearing chevrons apply to this entry:
    /// the current point of an ordered task beyond the first leg, or any
    /// item of a non-ordered task.
    pub fn bearing_delta_if_applicable(&self) -> Option<f64> {
        if self.is_ordered() {
            if self.is_current && self.index > 0 {
                self.delta_bearing
            } else {
                None
            }
        } else {
            self.delta_bearing
        }
    }

    /// The localized type label for the top line: "Start", "Finish",
    /// "TP n", "Center n", "Goto:" or the no-task fallback. Empty while
    /// navigating to an area-task target (the "Target:" prefix moves onto
    /// the distance field instead).
    pub fn type_label(&self, translator: &dyn Translate) -> String {
        match self.task_mode {
            TaskMode::Ordered => {
                if self.task_size == 0 {
                    translator.tr("Go'n home:").into_owned()
                } else if self.is_start() {
                    translator.tr("Start").into_owned()
                } else if self.is_finish() {
                    translator.tr("Finish").into_owned()
                } else if self.is_area_task() && self.navigate_to_target {
                    String::new()
                } else if self.is_area_task() {
                    format!("{} {}", translator.tr("Center"), self.index)
                } else {
                    format!("{} {}", translator.tr("TP"), self.index)
                }
            }
            TaskMode::Goto | TaskMode::Teammate | TaskMode::Abort => {
                translator.tr("Goto:").into_owned()
            }
            TaskMode::None => translator.tr("Go'n home:").into_owned(),
        }
    }
}
