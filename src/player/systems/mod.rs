//! Player domain: per-tick system modules.

pub(crate) mod dash;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod probes;

pub(crate) use dash::drive_dash;
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_freeze, apply_jump, apply_walk, handle_contact_edges, resolve_mode, shape_gravity,
    snapshot_edges, tick_timers, update_facing, wall_jump, wall_slide,
};
pub(crate) use probes::probe_contacts;
