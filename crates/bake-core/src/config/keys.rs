//! Well-known property keys.

pub const ARCHIVE_FILE: &str = "archive.file";
pub const ASCIIDOCTOR_ATTRIBUTES: &str = "asciidoctor.attributes";
pub const ASCIIDOCTOR_ATTRIBUTES_EXPORT: &str = "asciidoctor.attributes.export";
pub const ASCIIDOCTOR_ATTRIBUTES_EXPORT_PREFIX: &str = "asciidoctor.attributes.export.prefix";
pub const ASCIIDOCTOR_OPTION: &str = "asciidoctor.option";
pub const ASSET_FOLDER: &str = "asset.folder";
pub const ASSET_IGNORE_HIDDEN: &str = "asset.ignore";
pub const BUILD_TIMESTAMP: &str = "build.timestamp";
pub const CLEAR_CACHE: &str = "clear.cache";
pub const CONTENT_FOLDER: &str = "content.folder";
pub const DATE_FORMAT: &str = "date.format";
pub const DB_PATH: &str = "db.path";
pub const DB_STORE: &str = "db.store";
pub const DEFAULT_STATUS: &str = "default.status";
pub const DEFAULT_TYPE: &str = "default.type";
pub const DESTINATION_FOLDER: &str = "destination.folder";
pub const DRAFT_SUFFIX: &str = "draft.suffix";
pub const EXAMPLE_PROJECT_PREFIX: &str = "example.project.";
pub const FEED_FILE: &str = "feed.file";
pub const HEADER_SEPARATOR: &str = "header.separator";
pub const IMG_PATH_PREPEND_HOST: &str = "img.path.prepend.host";
pub const IMG_PATH_UPDATE: &str = "img.path.update";
pub const INDEX_FILE: &str = "index.file";
pub const MARKDOWN_EXTENSIONS: &str = "markdown.extensions";
pub const OUTPUT_EXTENSION: &str = "output.extension";
pub const PAGINATE_INDEX: &str = "index.paginate";
pub const POSTS_PER_PAGE: &str = "index.posts_per_page";
pub const RELATIVE_PATH_PREPEND_HOST: &str = "relative.path.prepend.host";
pub const RELATIVE_PATH_UPDATE: &str = "relative.path.update";
pub const RENDER_ARCHIVE: &str = "render.archive";
pub const RENDER_ENCODING: &str = "render.encoding";
pub const RENDER_FEED: &str = "render.feed";
pub const RENDER_INDEX: &str = "render.index";
pub const RENDER_SITEMAP: &str = "render.sitemap";
pub const RENDER_TAGS: &str = "render.tags";
pub const RENDER_TAGS_INDEX: &str = "render.tagsindex";
pub const SERVER_PORT: &str = "server.port";
pub const SITE_HOST: &str = "site.host";
pub const SITEMAP_FILE: &str = "sitemap.file";
pub const TAG_PATH: &str = "tag.path";
pub const TAG_SANITIZE: &str = "tag.sanitize";
pub const TEMPLATE_ENCODING: &str = "template.encoding";
pub const TEMPLATE_FOLDER: &str = "template.folder";
pub const THYMELEAF_LOCALE: &str = "thymeleaf.locale";
pub const URI_NO_EXTENSION: &str = "uri.noExtension";
pub const URI_NO_EXTENSION_PREFIX: &str = "uri.noExtension.prefix";
pub const VERSION: &str = "version";

// Keys holding resolved absolute folders (set at load, never read from files).
pub const SOURCE_FOLDER_PATH: &str = "sourceFolder";
pub const ASSET_FOLDER_PATH: &str = "assetFolder";
pub const TEMPLATE_FOLDER_PATH: &str = "templateFolder";
pub const CONTENT_FOLDER_PATH: &str = "contentFolder";
pub const DESTINATION_FOLDER_PATH: &str = "destinationFolder";

/// Prefix/suffixes of per-document-type template bindings:
/// `template.<type>.file` and `template.<type>.extension`.
pub const DOCTYPE_TEMPLATE_PREFIX: &str = "template.";
pub const DOCTYPE_FILE_SUFFIX: &str = ".file";
pub const DOCTYPE_EXTENSION_SUFFIX: &str = ".extension";

pub fn template_file_key(doc_type: &str) -> String {
    format!("{DOCTYPE_TEMPLATE_PREFIX}{doc_type}{DOCTYPE_FILE_SUFFIX}")
}

pub fn template_extension_key(doc_type: &str) -> String {
    format!("{DOCTYPE_TEMPLATE_PREFIX}{doc_type}{DOCTYPE_EXTENSION_SUFFIX}")
}
