use branca::{Branca, BrancaError, DecodeOptions, EncodeOptions};
use branca_test::{Bool, ExpectedError, TestFile, read_test};
use libtest_mimic::{Arguments, Failed, Trial};
use serde::Deserialize;

fn main() {
    let args = Arguments::from_args();

    let mut tests = vec![];
    BrancaTest::add_tests(&mut tests);

    libtest_mimic::run(&args, tests).exit();
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
struct BrancaTest {
    key: String,
    token: String,
    #[serde(flatten)]
    result: TestResult,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum TestResult {
    #[serde(rename_all = "kebab-case")]
    Success {
        #[allow(dead_code)]
        expect_fail: Bool<false>,
        nonce: String,
        timestamp: u32,
        payload: String,
    },
    #[serde(rename_all = "kebab-case")]
    Failure {
        #[allow(dead_code)]
        expect_fail: Bool<true>,
        error: ExpectedError,
        ttl: Option<u32>,
        now: Option<u64>,
    },
}

impl BrancaTest {
    fn add_tests(tests: &mut Vec<Trial>) {
        let test_file: TestFile<Self> = read_test("branca.json");
        for test in test_file.tests {
            let name = format!("{}::{}", test_file.name, test.name);
            tests.push(Trial::test(name, || test.test_data.test()));
        }
    }

    fn test(self) -> Result<(), Failed> {
        let branca = Branca::from_slice(&hex::decode(&self.key)?)?;

        match self.result {
            TestResult::Success {
                nonce,
                timestamp,
                payload,
                ..
            } => {
                let payload = hex::decode(payload)?;

                let decoded = branca.decode(&self.token, DecodeOptions::default())?;
                if decoded != payload {
                    return Err("decoded payload does not match".into());
                }

                let options = EncodeOptions::default()
                    .with_timestamp(timestamp)
                    .with_nonce(hex::decode(nonce)?);
                let token = branca.encode(&payload, options)?;
                if token != self.token {
                    return Err(format!("encoded token does not match: {token}").into());
                }

                Ok(())
            }
            TestResult::Failure { error, ttl, now, .. } => {
                let options = DecodeOptions { ttl, now };
                match branca.decode(&self.token, options) {
                    Ok(_) => Err("decoding token should fail".into()),
                    Err(err) if kind(&err) == Some(error) => Ok(()),
                    Err(err) => Err(format!("expected {error:?}, got {err:?}").into()),
                }
            }
        }
    }
}

fn kind(err: &BrancaError) -> Option<ExpectedError> {
    match err {
        BrancaError::InvalidArgument => Some(ExpectedError::InvalidArgument),
        BrancaError::Base62DecodeError => Some(ExpectedError::Base62),
        BrancaError::MalformedToken => Some(ExpectedError::Malformed),
        BrancaError::UnknownVersion => Some(ExpectedError::UnknownVersion),
        BrancaError::Forged => Some(ExpectedError::Forged),
        BrancaError::Expired => Some(ExpectedError::Expired),
        _ => None,
    }
}
