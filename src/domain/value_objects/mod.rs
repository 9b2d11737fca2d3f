pub mod remote_url;
pub mod vcs_type;
