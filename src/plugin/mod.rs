pub mod bolt_plugin;
