use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

pub fn open_clipboard() -> Result<ClipboardContext, String> {
    ClipboardContext::new().map_err(|e| e.to_string())
}

/// Copy one word per line. Local copies of the joined text are zeroized.
pub fn copy_words(ctx: &mut ClipboardContext, words: &[String]) -> Result<(), String> {
    let mut joined = words.join("\n");
    let result = ctx.set_contents(joined.clone()).map_err(|e| e.to_string());
    joined.zeroize();

    if result.is_ok()
        && let Ok(mut retrieved) = ctx.get_contents()
    {
        retrieved.zeroize();
    }
    result
}
