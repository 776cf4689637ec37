use solana_security_txt::security_txt;

security_txt! {
    name: "Bridge Guard program",
    project_url: "https://bridge.example.org",
    contacts: "email:security@bridge.example.org",
    policy: "https://bridge.example.org/security-policy"
}
