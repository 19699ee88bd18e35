pub mod mute_toggle;
