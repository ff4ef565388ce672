//! ECDSA/secp256k1 test vectors

use hex_literal::hex;

/// RFC6979 signing test vector; `(r, s)` are low-S.
pub struct SigningTestVector {
    /// Secret scalar.
    pub d: [u8; 32],
    /// Message hash.
    pub msg_hash: [u8; 32],
    /// Additional RFC6979 input.
    pub extra_entropy: Option<[u8; 32]>,
    /// Signature `r`.
    pub r: [u8; 32],
    /// Signature `s`.
    pub s: [u8; 32],
    /// Recovery id.
    pub recovery_id: u8,
}

/// ECDSA/secp256k1 signing test vectors
pub const SIGNING_TEST_VECTORS: &[SigningTestVector] = &[
    // d = 1, SHA-256("")
    SigningTestVector {
        d: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        msg_hash: hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
        extra_entropy: None,
        r: hex!("77c8d336572f6f466055b5f70f433851f8f535f6c4fc71133a6cfd71079d03b7"),
        s: hex!("0ed9f5eb8aa5b266abac35d416c3207e7a538bf5f37649727d7a9823b1069577"),
        recovery_id: 1,
    },
    // SHA-256("sample")
    SigningTestVector {
        d: hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721"),
        msg_hash: hex!("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf"),
        extra_entropy: None,
        r: hex!("432310e32cb80eb6503a26ce83cc165c783b870845fb8aad6d970889fcd7a6c8"),
        s: hex!("530128b6b81c548874a6305d93ed071ca6e05074d85863d4056ce89b02bfab69"),
        recovery_id: 0,
    },
    SigningTestVector {
        d: hex!("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f"),
        msg_hash: hex!("4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a"),
        extra_entropy: None,
        r: hex!("e3650c6a94419ce0db9d9e209ca5bac2f9a888f376bd7f05a142dd87f1fd90f6"),
        s: hex!("252e6c025089ed9b784daed95ce09b1dfdb46d454e6fc1e1bd7ea007513f5c9a"),
        recovery_id: 0,
    },
    // d = 1, SHA-256(""), with extra entropy
    SigningTestVector {
        d: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        msg_hash: hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
        extra_entropy: Some([0x01; 32]),
        r: hex!("37bd8799d46b02f5cf448234299c3a052493783412bde3049ea9a9c57a0fdb49"),
        s: hex!("1af33810da571a55206997385379c1528b22cf144397dca9b67cf7746d72f359"),
        recovery_id: 0,
    },
    // SHA-256("message 2"); raw s is high
    SigningTestVector {
        d: hex!("0000000000000000000000000000000000000000000000000000000000003de1"),
        msg_hash: hex!("84768ddee659efeafdeb972b55143141bc23b6e333c70e8b68d29774ab09a548"),
        extra_entropy: None,
        r: hex!("e6579030d11a7701967eb5bf1450899a229a18765bb0de28b8b62abb8b5204e4"),
        s: hex!("44afe7814892c8d4e6dd6791902862c09f0094d7b98ad5fb5d9bab11f6c6d1f5"),
        recovery_id: 0,
    },
];

/// Signature whose RFC6979 `s` lands in the upper half of the scalar field.
pub struct HighSTestVector {
    /// Secret scalar.
    pub d: [u8; 32],
    /// Compressed public key.
    pub public_key: [u8; 33],
    /// Message hash.
    pub msg_hash: [u8; 32],
    /// Signature `r`.
    pub r: [u8; 32],
    /// `s` before normalization.
    pub raw_s: [u8; 32],
    /// Recovery id before normalization.
    pub raw_recovery_id: u8,
    /// `n - raw_s`.
    pub canonical_s: [u8; 32],
    /// Recovery id after normalization.
    pub canonical_recovery_id: u8,
}

/// SHA-256("message 2") signed with `d = 0x3de1`.
pub const HIGH_S_VECTOR: HighSTestVector = HighSTestVector {
    d: hex!("0000000000000000000000000000000000000000000000000000000000003de1"),
    public_key: hex!("03c74f8dab54590ad13fff217fb62f43ed7f42ffe36c8fddacfb6315f4a3406094"),
    msg_hash: hex!("84768ddee659efeafdeb972b55143141bc23b6e333c70e8b68d29774ab09a548"),
    r: hex!("e6579030d11a7701967eb5bf1450899a229a18765bb0de28b8b62abb8b5204e4"),
    raw_s: hex!("bb50187eb76d372b1922986e6fd79d3e1bae480ef5bdca406236b37ad96f6f4c"),
    raw_recovery_id: 1,
    canonical_s: hex!("44afe7814892c8d4e6dd6791902862c09f0094d7b98ad5fb5d9bab11f6c6d1f5"),
    canonical_recovery_id: 0,
};

/// Signature recovery test vectors
pub struct RecoveryTestVector {
    /// Compressed public key.
    pub pk: [u8; 33],
    /// `r || s || recovery id`.
    pub sig: [u8; 65],
    /// Message, hashed with SHA-256 before signing.
    pub msg: &'static [u8],
}

/// Signature recovery test vectors
pub const RECOVERY_TEST_VECTORS: &[RecoveryTestVector] = &[
    // Recovery ID 0
    RecoveryTestVector {
        pk: hex!("021a7a569e91dbf60581509c7fc946d1003b60c7dee85299538db6353538d59574"),
        sig: hex!(
            "ce53abb3721bafc561408ce8ff99c909f7f0b18a2f788649d6470162ab1aa03239
             71edc523a6d6453f3fb6128d318d9db1a5ff3386feb1047d9816e780039d5200"
        ),
        msg: b"example message",
    },
    // Recovery ID 1
    RecoveryTestVector {
        pk: hex!("036d6caac248af96f6afa7f904f550253a0f3ef3f5aa2fe6838a95b216691468e2"),
        sig: hex!(
            "46c05b6368a44b8810d79859441d819b8e7cdc8bfd371e35c53196f4bcacdb5135
             c7facce2a97b95eacba8a586d87b7958aaf8368ab29cee481f76e871dbd9cb01"
        ),
        msg: b"example message",
    },
];
