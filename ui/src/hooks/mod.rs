pub mod use_modal_visibility;
