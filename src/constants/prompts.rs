//! Question-generation prompt templates.
//!
//! Placeholders are filled in this order: `{count}`, `{type}`, `{text}`.
//! `{text}` goes last so document content is never re-scanned for placeholders.

pub const COUNT_PLACEHOLDER: &str = "{count}";
pub const TYPE_PLACEHOLDER: &str = "{type}";
pub const TEXT_PLACEHOLDER: &str = "{text}";

pub const QUESTION_PROMPT_EN: &str = "Based on the text below, create {count} questions in the format \"{type}\".
If the format is \"Multiple Choice\", include 4 options (A, B, C, D) and provide the answer key.
If the format is \"True or False\", also provide the answers.
Ensure questions and answers are derived only from information present in the text.

Text:
---
{text}
---
";

pub const QUESTION_PROMPT_ID: &str = "Berdasarkan teks di bawah ini, buatlah {count} soal dengan format \"{type}\".
Jika formatnya \"Pilihan Ganda\", sertakan 4 pilihan (A, B, C, D) dan berikan kunci jawabannya.
Jika formatnya \"Benar atau Salah\", berikan juga jawabannya.
Pastikan pertanyaan dan jawaban hanya berasal dari informasi yang ada dalam teks.

Teks:
---
{text}
---
";
