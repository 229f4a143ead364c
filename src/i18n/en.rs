// ============================================================================
// TransDesk - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Common
    ("common.cancelled", "Cancelled"),
    // Validation
    ("validation.english_required", "Please enter the English text"),
    (
        "validation.key_rule",
        "Invalid key `{}`: it must start with a letter or underscore and contain only letters, digits and underscores",
    ),
    ("validation.tag_required", "Please enter a tag name"),
    (
        "validation.tag_rule",
        "Invalid tag `{}`: only letters, digits, underscores and Chinese characters are allowed",
    ),
    ("validation.tag_exists", "Tag `{}` already exists"),
    ("validation.unknown_tag", "Tag `{}` does not exist"),
    ("validation.database_required", "Please enter a database name"),
    (
        "validation.database_rule",
        "Invalid database name `{}`: it must start with a letter or underscore and contain only letters, digits and underscores",
    ),
    ("validation.unknown_database", "Database `{}` does not exist"),
    ("validation.unknown_language", "Unknown language `{}`"),
    ("validation.source_locked", "English is the source language and cannot be changed"),
    ("validation.invalid_id", "Invalid entry id {}"),
    // Notices
    ("notice.add_success", "Translation added"),
    ("notice.update_success", "Translation updated"),
    ("notice.delete_success", "Translation deleted"),
    ("notice.delete_failed", "Delete failed"),
    ("notice.tag_created", "Tag created"),
    ("notice.tag_deleted", "Tag deleted"),
    ("notice.language_toggled", "Language status updated"),
    ("notice.language_removed", "Language removed"),
    ("notice.database_created", "Database created"),
    ("notice.database_switched", "Database switched"),
    ("notice.operation_failed", "Operation failed"),
    ("notice.toggle_language_failed", "Failed to update the language"),
    ("notice.remove_language_failed", "Failed to remove the language"),
    ("notice.create_database_failed", "Failed to create the database"),
    ("notice.switch_database_failed", "Failed to switch the database"),
    ("notice.get_translations_failed", "Failed to load translations"),
    ("notice.get_languages_failed", "Failed to load languages"),
    ("notice.get_tags_failed", "Failed to load tags"),
    ("notice.get_logs_failed", "Failed to load operation logs"),
    ("notice.get_databases_failed", "Failed to load databases"),
    ("notice.search_failed", "Search failed"),
    // Export
    ("export.single_success", "Exported {} to {}"),
    (
        "export.all_success",
        "Exported {} languages: {} of {} entries, {} with keys",
    ),
    ("export.partial_failed", "Export failed for: {}"),
    ("export.failed", "Export failed"),
    ("export.nothing", "No active languages to export"),
    ("export.preparing", "Loading languages..."),
    ("export.running", "Exporting..."),
    ("export.progress", "Exporting... {}/{}"),
    // List
    ("list.loading", "Loading translations..."),
    ("list.loading_more", "Loading more..."),
    ("list.empty", "No translations yet"),
    ("list.footer", "Showing {} of {} entries"),
    ("list.search_footer", "{} entries match \"{}\""),
    ("list.has_more", "More entries available, use --pages or --all"),
    ("search.loading", "Searching..."),
    // Entry
    ("entry.saving", "Saving..."),
    ("entry.deleting", "Deleting..."),
    ("entry.confirm_delete", "Delete entry #{}? [y/N]"),
    // Tag
    ("tag.loading", "Loading tags..."),
    ("tag.saving", "Creating tag..."),
    ("tag.deleting", "Deleting tag..."),
    (
        "tag.confirm_delete",
        "Delete tag `{}`? {} entries use it and will lose the tag. [y/N]",
    ),
    // Language
    ("lang.loading", "Loading languages..."),
    ("lang.saving", "Updating languages..."),
    ("lang.confirm_remove", "Remove language {}? [y/N]"),
    // Database
    ("db.loading", "Loading databases..."),
    ("db.saving", "Creating database..."),
    ("db.switching", "Switching database..."),
    // Logs
    ("logs.loading", "Loading operation logs..."),
    ("log.add", "Add"),
    ("log.update", "Update"),
    ("log.delete", "Delete"),
    ("log.add_tag", "Add tag"),
    ("log.delete_tag", "Delete tag"),
    // Summary
    ("summary.tags_title", "Tags ({})"),
    ("summary.no_tags", "No tags"),
    ("summary.languages_title", "Languages ({} active)"),
    ("summary.source_language", "source"),
    ("summary.databases_title", "Databases ({})"),
    ("summary.current", "current"),
    ("summary.logs_title", "Operation logs"),
    ("summary.no_logs", "No operation logs"),
    ("summary.log_count", "{} entries"),
    ("summary.export_title", "Export"),
    ("summary.export_stats", "{}/{} exported, {} with keys"),
    (
        "summary.export_totals",
        "{} of {} languages exported, {} entries, {} with keys",
    ),
    // Locale
    ("locale.current", "Interface language: {}"),
    ("locale.saved", "Interface language set to {}"),
    ("locale.unsupported", "Unsupported interface language `{}` (expected en or zh)"),
    ("locale.state_unreadable", "Ignoring unreadable interface language file {}: {}"),
    // Init
    ("init.config_exists", "Configuration file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite it"),
    ("init.config_created", "Configuration file created: {}"),
    (
        "init.next_steps",
        "Edit server.base_url to point at your translation server",
    ),
    ("init.create_failed", "Failed to create configuration file: {}"),
];
