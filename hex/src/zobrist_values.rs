use super::constants::MAX_AREA;

pub const INITIAL: u64 = 0x9c0adec88ea59da2;

pub const SQUARE_VALUES: [[u64; MAX_AREA]; 2] = [
    [
        0x4a462684365eb8ea, 0xa2cd900d7841426b, 0x3b5af9081d08137f, 0xd7e25d90d3306bf6,
        0x66de71d17cc9c829, 0x8d4f8e3910c0aaef, 0x6bfacb2e75361cb1, 0xad452c1018ea69b1,
        0x68840f124c0e5c82, 0x71fe7fd9188d1614, 0x6b8eb14559301346, 0x16bfa32774844063,
        0xb9d19441942dd9a9, 0x7680370bb69e1081, 0x5b47cecaac1d5b8c, 0x614b02a266fdafa9,
        0x748da12ac89e951a, 0x37bb2e5b62a616af, 0x633db5bbfe5d743a, 0x486693c90e3dd94e,
        0x1536c674e0cb31b1, 0x5c1a0892fff30c0d, 0x55f5f2855dd9db47, 0x7c12451906c69695,
        0xc6516bc363bac007, 0xe522c9b34bb8dd68, 0x0228a335878b19b2, 0x4573200eec6616f4,
        0xc1f39600fc9e7baf, 0x5b7a93fe090587b9, 0x2f39060f6af06e9f, 0x9c981ec8ad7b701b,
        0x1b05328fc6b2efd0, 0xfd0a0c03d84f5c85, 0x3871ecc26adb5072, 0x5eda692c65c25fd0,
        0x1450fd02cff4e982, 0x964eaabbecab5c78, 0x94eb045d6da7ab9b, 0xb2731e096eae0592,
        0x84be81ab7edb2522, 0x93a895432c8688a8, 0xcad886bd0a36ff82, 0x98786dca72e19267,
        0x79b780ba6a091f66, 0xd76526767af55035, 0x4df1c8f42ee5dbd8, 0x024ebded59bb8bdf,
        0x18c53a8823cbeb6d, 0xac4c7d70d986d8e0, 0x353fd486ddc586e5, 0xb164d9ae9b82ff2f,
        0x5de8915cef2dd3a6, 0x864ab8bcbbaf19c5, 0xf9070011461586ed, 0xb708a249e734a557,
        0x2d5aff2cada87e4e, 0xdcd06b0ea3bb876d, 0xfdcdeb64679394e9, 0xecc2697992c6695e,
        0xf4679522b370a15c, 0x30f922135140df05, 0x0ac475ef26727127, 0x149481d8dbf86097,
        0x3406cc09eee90b51, 0xd2f84762ce2bd2f1, 0x04decfad0704aedf, 0xc8a6c664db9d6430,
        0xa041a0c22133d2bf, 0xea6142df3dc7599f, 0x02ac38297890bf44, 0x4b9c4ad8b89f45f4,
        0x52094638bdf29114, 0x7bdb595c73f776d8, 0xb3779930b317e532, 0xefdd2c652ca976fd,
        0xe7b5158d22f61120, 0x6814401b5d9e1f03, 0x9d1d0ce4217e866c, 0x797cb00c78f0af55,
        0xe760f486a2ace982, 0x38cf6a90c3ebeab7, 0x7c3732c00dcb25a7, 0x06750bf88b73469b,
        0xfebf50674e62ae44, 0xcb5261f604d04d41, 0x523e99e88fa54843, 0x2a9618f31b4e6a03,
        0x35a54b78e1f62090, 0x36a23ab511e75ed0, 0xc7425daeb4924b46, 0x1465afb4383b9fcf,
        0xf5ed126c8ab9f71d, 0xd492f26a47c88a0c, 0x9d07ec4aef3aa126, 0x3c7b8d87f58e52b3,
        0x9efe031a81411b55, 0xefcb8a6a2716aadf, 0x48d614c6c38007e3, 0x7923e9fdcd8c0d53,
        0x6404152ad143b2f7, 0xa19a6c67f87d6070, 0xd7e45d8c7c618ce2, 0x9a58b74a6744398f,
        0x76cb669a923f69ca, 0x0d05e5a4b8744563, 0x8625ed910016e2f9, 0x23b4012e91514d99,
        0xc0d2713115b282a5, 0x9a3d1a2244c97230, 0x353107bf636031b5, 0xf303702d7347ad2d,
        0xcb3e549c8f8823d0, 0xcd70257633a12d2d, 0xb80f259d593e33f5, 0xfbcdb45a001e098a,
        0xcc27f318f0d79bbb, 0xae1661ae1e3970d7, 0x7aefba2346dd6889, 0xb6c5eedaad368ce4,
        0xceb308c295c8b015,
    ],
    [
        0x0f15107d6cdb4668, 0x874217360db73ed1, 0xe4cce6692b4838b0, 0x9ecca69f0681e923,
        0x6ee1b668f5942a09, 0x4a37db718098b403, 0xde10f658f5df4231, 0x466cab9dc1a845da,
        0xaf804a82dfdebf42, 0x318019f6c9c31d48, 0xf715cdd0940bffb1, 0x7a1bf3818ff56139,
        0xfd640173ec5436d1, 0xa707e1245109d229, 0xe0a8eecd5eb56a37, 0x29057cd7ac3c2901,
        0xc4073476b185d4e2, 0xc97f603def26d883, 0x47d89df31a69bf4d, 0x583cf421fcae3031,
        0xde4d43baf849c90d, 0xd801f5798c02071d, 0x9310e7185e93555f, 0xf372d9efbceb0d91,
        0xa654f9dc33351c24, 0x260de6d34a464ef6, 0x2a4822c4204734a8, 0xb36c3c61f9401d4b,
        0x017225be1ebed516, 0xcc5320de981dc2c6, 0xd4a89559351868ce, 0x4c5dd86fa97cd15b,
        0x8158a5ef5574a8a9, 0xe814cbe85c401f69, 0xe0a9143ef9c0cbbe, 0x7f926d83afe3a1f7,
        0xcb69b2b2ff92fdc0, 0x4333f8b2c8cdac19, 0xa876dfcd540ae492, 0x83ac2c61aa09f62e,
        0x019bb88d8ca1d116, 0x996c689148536519, 0x7f3f6c49b4f19e02, 0x48ff131c6f036710,
        0x422d73e3a84b3f7f, 0x964a41d673720470, 0x3547f3b6536c63c4, 0x2f7d388ec9f92ecb,
        0xa64acfe3c86c19c3, 0xf607ae998f25e89e, 0x836eeb51b5e39bcd, 0x73b48efd9efc82da,
        0x4631e8ec6f02f489, 0x87b9340ebf3148f1, 0x4fe670868720d2a4, 0x5fea08ada0276047,
        0x5cd0ffa280b80a87, 0xf1eec9a42c29ea02, 0x1edd48cc25d83a2f, 0xeb2762bf26b9ea92,
        0x066bf95792f461b8, 0x3e1fb3c28e656710, 0x3a60ef2884570fc1, 0x44774705338f4cbf,
        0xaff248ab1e18c0d2, 0x766e25e565e08d19, 0xc4825ae60c8f416b, 0x884db8c30c0d07b3,
        0xb7e63a39aae348fe, 0x7c032854d271269b, 0x7176dfb34377e355, 0x9d35c82055750a76,
        0x8662e57c3b1adcd9, 0x66b6068d7b700b83, 0x34e6baf35a2b887f, 0xcffbe4316add9539,
        0xcfe3a8d736504f48, 0xa9ecdd934b79da5c, 0xf335001ff70118d2, 0xaa632e0edcef6541,
        0xfef4e64f1c713b44, 0xa2c89e2bd8051a7e, 0x087b43aafb36442a, 0xbfab38bab3a6ee2d,
        0x6f307a0c77b7b39f, 0x3e2cd40dec9550fc, 0xa2f07d13d5c99541, 0x606f2c6353358e9a,
        0x1cc543754faa9bbb, 0x581bb8985a498b1c, 0x063be2260e840475, 0x79750c4029fe67d7,
        0x01967309e6fb8a4c, 0x6c7bdb40fad7da64, 0xf18bffa7207a0c2f, 0xa70479523a25016b,
        0xf6cec4c50ebc3efb, 0x5f9ece225833c242, 0x26f10b61be3e5091, 0x262391e8be778cdb,
        0xddb9b9bcce1ab7d4, 0x872a4cd89765024d, 0x6140ac20ad64ceea, 0x2202a69776a035df,
        0xe62500e84481fe6a, 0x96123ebabec1e49f, 0xe619e7ccfd475807, 0x4718b2ee339d6d9d,
        0xa30544b3fea01366, 0x9f57b783c201f6c2, 0xb1434544502912d7, 0x0442905467237a8f,
        0xe692559e08321822, 0xba929a7d821020ed, 0xe40ac164e6020cc8, 0x92f5d11293a8b8da,
        0xd151772e8aacbf3d, 0xcb99d60f7949b5a1, 0x6d51555e03ba9f2f, 0xf2f4fd889dbfff35,
        0xbb935cfde8f73c9d,
    ],
];
