use crate::cli::{args::CheckArgs, global::GlobalArgs};
use rfc_basenc::Codec;

/// Multi-script sample exercising one- to four-byte UTF-8 sequences.
pub const SAMPLE: &str = "你好, Hello, 안녕하세요, こんにちは, привет, Hola, Bonjour, Hallo, Ciao, Olá, здравствуйте, Namaste, مرحبا, สวัสดี, Chào bạn";

pub fn handle(args: CheckArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = args.text.as_deref().unwrap_or(SAMPLE).as_bytes();
    let mut failed = Vec::new();

    for codec in Codec::ALL {
        let encoded = codec.encode(input);
        match codec.decode(&encoded) {
            Ok(decoded) if decoded == input => {
                if !global.quiet {
                    println!("{} test passed", label(codec));
                }
            }
            result => {
                println!("{} test failed", label(codec));
                println!("Encoded: {}", encoded);
                match result {
                    Ok(decoded) => println!("Decoded: {}", String::from_utf8_lossy(&decoded)),
                    Err(e) => println!("Decoded: {}", e),
                }
                failed.push(codec.as_str());
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(format!("round-trip check failed for: {}", failed.join(", ")).into())
    }
}

/// Report name for a codec, capitalised the way the check output prints it.
fn label(codec: Codec) -> &'static str {
    match codec {
        Codec::Base16 => "Base16",
        Codec::Base32 => "Base32",
        Codec::Base64 => "Base64",
    }
}
