pub mod carousel;
pub mod contact_form;
pub mod noise;
pub mod section_header;
pub mod social_row;
