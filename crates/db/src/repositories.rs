pub mod channel_binding;
