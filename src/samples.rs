//! Authentic message/key pairs for checking the machine end to end.
//!
//! Keys are settings strings (see [`crate::settings`]); plaintexts are the
//! German decrypts as published with the original traffic.

/// A historical ciphertext with its key and decrypt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleMessage {
    pub name: &'static str,
    pub settings: &'static str,
    pub ciphertext: &'static str,
    pub plaintext: &'static str,
}

/// Sample messages covering 3-rotor, ring, reflector A/B and M4 setups.
pub const KNOWN_MESSAGES: [SampleMessage; 5] = [
    SampleMessage {
        name: "Operation Barbarossa, 1941 (part 1)",
        settings: "AV;BS;CG;DL;FU;HZ;IN;KM;OW;RX,B,II,B,B,IV,L,U,V,A,L",
        ciphertext: "EDPUDNRGYSZRCXNUYTPOMRMBOFKTBZREZKMLXLVEFGUEYSIOZVEQMIKUBPMMYLKLTTDEISMDICAGYKUACTCDOMOHWXMUUIAUBSTSLRNBZSZWNRFXWFYSSXJZVIJHIDISHPRKLKAYUPADTXQSPINQMATLPIFSVKDASCTACDPBOPVHJK",
        plaintext: "AUFKLXABTEILUNGXVONXKURTINOWAXKURTINOWAXNORDWESTLXSEBEZXSEBEZXUAFFLIEGERSTRASZERIQTUNGXDUBROWKIXDUBROWKIXOPOTSCHKAXOPOTSCHKAXUMXEINSAQTDREINULLXUHRANGETRETENXANGRIFFXINFXRGTX",
    },
    SampleMessage {
        name: "Operation Barbarossa, 1941 (part 2)",
        settings: "AV;BS;CG;DL;FU;HZ;IN;KM;OW;RX,B,II,L,B,IV,S,U,V,D,L",
        ciphertext: "SFBWDNJUSEGQOBHKRTAREEZMWKPPRBXOHDROEQGBBGTQVPGVKBVVGBIMHUSZYDAJQIROAXSSSNREHYGGRPISEZBOVMQIEMMZCYSGQDGRERVBILEKXYQIRGIRQNRDNVRXCYYTNJR",
        plaintext: "DREIGEHTLANGSAMABERSIQERVORWAERTSXEINSSIEBENNULLSEQSXUHRXROEMXEINSXINFRGTXDREIXAUFFLIEGERSTRASZEMITANFANGXEINSSEQSXKMXKMXOSTWXKAMENECXK",
    },
    SampleMessage {
        name: "Enigma Instruction Manual, 1930",
        settings: "AM;FI;NV;PS;TU;WZ,A,II,A,X,I,B,M,III,L,V",
        ciphertext: "GCDSEAHUGWTQGRKVLFGXUCALXVYMIGMMNMFDXTGNVHVRMMEVOUYFZSLRHDRRXFJWCFHUHMUNZEFRDISIKBGPMYVXUZ",
        plaintext: "FEINDLIQEINFANTERIEKOLONNEBEOBAQTETXANFANGSUEDAUSGANGBAERWALDEXENDEDREIKMOSTWAERTSNEUSTADT",
    },
    SampleMessage {
        name: "U-264 (Kapitänleutnant Hartwig Looks), 1942",
        settings: "AT;BL;DF;GJ;HM;NW;OP;QY;RZ;VX,BThin,Beta,V,A,II,J,A,IV,N,A,I,A,V",
        ciphertext: "NCZWVUSXPNYMINHZXMQXSFWXWLKJAHSHNMCOCCAKUQPMKCSMHKSEINJUSBLKIOSXCKUBHMLLXCSJUSRRDVKOHULXWCCBGVLIYXEOAHXRHKKFVDREWEZLXOBAFGYUJQUKGRTVUKAMEURBVEKSUHHVOYHABCJWMAKLFKLMYFVNRIZRVVRTKOFDANJMOLBGFFLEOPRGTFLVRHOWOPBEKVWMUQFMPWPARMFHAGKXIIBG",
        plaintext: "VONVONJLOOKSJHFFTTTEINSEINSDREIZWOYYQNNSNEUNINHALTXXBEIANGRIFFUNTERWASSERGEDRUECKTYWABOSXLETZTERGEGNERSTANDNULACHTDREINULUHRMARQUANTONJOTANEUNACHTSEYHSDREIYZWOZWONULGRADYACHTSMYSTOSSENACHXEKNSVIERMBFAELLTYNNNNNNOOOVIERYSICHTEINSNULL",
    },
    SampleMessage {
        name: "Scharnhorst (Konteradmiral Erich Bey), 1943",
        // Rings H and M given as 8 and 13.
        settings: "AN;EZ;HK;IJ;LR;MQ;OT;PV;SW;UX,B,III,U,1,VI,Z,8,VIII,V,13",
        ciphertext: "YKAENZAPMSCHZBFOCUVMRMDPYCOFHADZIZMEFXTHFLOLPZLFGGBOTGOXGRETDWTJIQHLMXVJWKZUASTR",
        plaintext: "STEUEREJTANAFJORDJANSTANDORTQUAAACCCVIERNEUNNEUNZWOFAHRTZWONULSMXXSCHARNHORSTHCO",
    },
];
