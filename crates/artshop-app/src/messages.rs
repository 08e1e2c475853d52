//! User-facing strings. The catalog is administered in Russian; every
//! notice, confirmation, and fallback text lives here.

// Artists
pub const ARTIST_ADDED: &str = "Артист успешно добавлен";
pub const ARTIST_UPDATED: &str = "Артист успешно обновлен";
pub const ARTIST_DELETED: &str = "Артист успешно удален";
pub const ARTIST_DELETE_CONFIRM: &str = "Вы уверены, что хотите удалить этого артиста?";
pub const ARTIST_LOAD_FALLBACK: &str = "Неизвестная ошибка при загрузке артиста";
pub const ARTIST_SAVE_FALLBACK: &str = "Неизвестная ошибка при сохранении артиста";
pub const ARTIST_DELETE_FALLBACK: &str = "Неизвестная ошибка при удалении артиста";
pub const ARTISTS_LOAD_FALLBACK: &str = "Неизвестная ошибка при загрузке артистов";
pub const ARTISTS_SEARCH_FALLBACK: &str = "Неизвестная ошибка при поиске артистов";

// Artworks
pub const ART_ADDED: &str = "Произведение успешно добавлено";
pub const ART_UPDATED: &str = "Произведение успешно обновлено";
pub const ART_DELETED: &str = "Произведение успешно удалено";
pub const ART_DELETE_CONFIRM: &str =
    "Вы уверены, что хотите удалить это произведение? Это действие нельзя отменить.";
pub const ART_LOAD_FALLBACK: &str = "Не удалось загрузить данные произведения";
pub const ART_SAVE_FALLBACK: &str = "Неизвестная ошибка при сохранении произведения";
pub const ART_DELETE_FALLBACK: &str = "Неизвестная ошибка при удалении произведения";
pub const ARTS_LOAD_FALLBACK: &str = "Неизвестная ошибка при загрузке произведений";
pub const ARTS_SEARCH_TITLE_FALLBACK: &str = "Неизвестная ошибка при поиске по названию";
pub const ARTS_SEARCH_CLASSIFICATION_FALLBACK: &str =
    "Неизвестная ошибка при поиске по имени классификации";
pub const ARTS_SEARCH_ARTIST_FALLBACK: &str = "Неизвестная ошибка при поиске по имени артиста";

// Classifications
pub const CLASSIFICATION_ADDED: &str = "Классификация успешно добавлена";
pub const CLASSIFICATION_UPDATED: &str = "Классификация успешно обновлена";
pub const CLASSIFICATION_DELETED: &str = "Классификация успешно удалена";
pub const CLASSIFICATION_DELETE_CONFIRM: &str =
    "Вы уверены, что хотите удалить эту классификацию?";
pub const CLASSIFICATION_LOAD_FALLBACK: &str = "Неизвестная ошибка при загрузке классификации";
pub const CLASSIFICATION_SAVE_FALLBACK: &str = "Неизвестная ошибка при сохранении классификации";
pub const CLASSIFICATION_DELETE_FALLBACK: &str = "Неизвестная ошибка при удалении классификации";
pub const CLASSIFICATIONS_LOAD_FALLBACK: &str = "Неизвестная ошибка при загрузке классификаций";
pub const CLASSIFICATIONS_SEARCH_FALLBACK: &str = "Неизвестная ошибка при поиске классификаций";

// Shared
pub const REFERENCES_LOAD_FALLBACK: &str = "Неизвестная ошибка при загрузке данных";
pub const NO_ARTWORKS: &str = "Нет произведений";
pub const NO_CLASSIFICATION: &str = "Без классификации";
pub const NO_ARTISTS: &str = "Без артистов";
