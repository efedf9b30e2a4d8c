// CLI errors are handled via anyhow at the top level.

pub fn format_error(err: &anyhow::Error) -> String {
    let mut msg = format!("error: {err}");
    for cause in err.chain().skip(1) {
        msg.push_str(&format!("\n  caused by: {cause}"));
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn includes_cause_chain() {
        let err = Err::<(), _>(std::io::Error::other("disk gone"))
            .context("reading change.json")
            .unwrap_err();
        assert_eq!(
            format_error(&err),
            "error: reading change.json\n  caused by: disk gone"
        );
    }
}
